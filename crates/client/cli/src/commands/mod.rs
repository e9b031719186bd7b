mod damage;
mod derive;
mod roll;

pub use damage::Damage;
pub use derive::Derive;
pub use roll::Roll;

use std::path::Path;

use anyhow::Result;
use runtime::SheetRuntime;
use sheet_content::ActorLoader;

/// Id the CLI stores its single sheet under.
const ACTOR_ID: &str = "actor";

/// Load `path`, recompute it through `runtime` and store it under [`ACTOR_ID`].
fn load_actor(runtime: &SheetRuntime, path: &Path) -> Result<()> {
    let sheet = ActorLoader::load(path)?;
    runtime.insert(ACTOR_ID, sheet)?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
