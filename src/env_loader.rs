use std::env;
use std::path::PathBuf;

fn fallback_dotenv_path(cfsync_home: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(base) = cfsync_home {
        return Some(base.join(".env"));
    }
    Some(home_dir?.join(".cfsync/env"))
}

/// Load `CFSYNC_*` settings (currently `CFSYNC_NODETOOL_BIN`) from a
/// `.env` in the working directory, falling back to `$CFSYNC_HOME/.env`
/// or `~/.cfsync/env`.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let fallback = fallback_dotenv_path(
        env::var_os("CFSYNC_HOME").map(PathBuf::from),
        dirs::home_dir(),
    );

    let Some(path) = fallback else {
        return;
    };
    if path.is_file() {
        let _ = dotenvy::from_path(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::fallback_dotenv_path;
    use std::path::PathBuf;

    #[test]
    fn cfsync_home_takes_precedence_over_home_dir() {
        let got = fallback_dotenv_path(
            Some(PathBuf::from("/etc/cfsync")),
            Some(PathBuf::from("/home/alice")),
        );
        assert_eq!(got, Some(PathBuf::from("/etc/cfsync/.env")));
    }

    #[test]
    fn home_dir_fallback_uses_dot_cfsync() {
        let got = fallback_dotenv_path(None, Some(PathBuf::from("/home/alice")));
        assert_eq!(got, Some(PathBuf::from("/home/alice/.cfsync/env")));
    }
}
