use anyhow::Result;
use tracing::debug;

use crate::utils::{find_test_executables, resolve_path};

pub fn list_command(path_arg: &str, json: bool) -> Result<()> {
    debug!("Listing test executables under: {}", path_arg);

    let root = resolve_path(path_arg)?;
    let executables = find_test_executables(&root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&executables)?);
        return Ok(());
    }

    if executables.is_empty() {
        println!("No test executables found under {}", root.display());
        return Ok(());
    }

    println!(
        "🔍 Found {} test executable(s) under {}",
        executables.len(),
        root.display()
    );
    for exe in &executables {
        println!("  {}", exe.display());
    }

    Ok(())
}
