use std::fs;
use std::io;
use std::path::Path;

/// Unpack a gzip-compressed tarball into `dest_dir`
pub fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> io::Result<()> {
    let file = fs::File::open(archive_path)?;
    let gz_decoder = flate2::read::GzDecoder::new(file);
    let mut archive = tar::Archive::new(gz_decoder);
    archive.unpack(dest_dir)?;
    Ok(())
}

/// Move `source` to `dest`, replacing whatever is already there.
///
/// This is a plain rename, so it fails across filesystems.
pub fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(source, dest)?;
    make_executable(dest)
}

/// Make a file executable (Unix only)
#[cfg(unix)]
pub fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
