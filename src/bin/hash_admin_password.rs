// src/bin/hash_admin_password.rs
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead};

/// Print an Argon2 PHC string for `ADMIN_PASSWORD_HASH`. The password is
/// taken from the first argument, or from the first line of stdin.
fn main() -> Result<()> {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("reading password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        bail!("usage: hash_admin_password <password>  (or pipe it on stdin)");
    }

    let hash = robotblog::infrastructure::security::password::hash_password(&password)
        .map_err(|err| anyhow::anyhow!("hashing failed: {err}"))?;
    println!("{hash}");
    Ok(())
}
