use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// The configuration `init` writes; it spells out the built-in defaults.
pub const DEFAULT_CONFIG: &str = r#"# irc-numerics configuration

registry = "numerics.yml"
package = "irc"
header = ["// Code generated by irc-numerics. DO NOT EDIT.", "//nolint"]
layout = "nested"

# Standards documents in release order; earlier documents claim entries first
standards = ["RFC1459", "RFC2812"]

[extension]
enabled = true
heading = "IRCv3"
marker = "ircv3.net"

[[overrides]]
heading = "Other"
field = "name"
value = "RPL_ISUPPORT"

[ignored]
heading = "Ignored"
rationale = [
    "",
    "Anything not in an RFC has not been included because",
    "there are way too many conflicts to deal with.",
]

[obsolete]
heading = "Obsolete"
rationale = []
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force).map(|_| ())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    eprintln!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(config_path)
}
