// Cache path resolution.
// The SSO client keeps issued tokens under ~/.aws/sso/cache.

use std::path::PathBuf;

use directories::UserDirs;

/// Directory where the external SSO client stores token cache files.
pub fn sso_cache_dir() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().join(".aws").join("sso").join("cache"))
}
