use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::util::e500;

/// Root of the SPA bundle plus the entry document served whenever a request
/// path does not resolve to a real file.
#[derive(Clone, Debug)]
pub struct SpaAssets {
    root: PathBuf,
    index_file: String,
}

impl SpaAssets {
    pub fn new(root: impl Into<PathBuf>, index_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
        }
    }

    fn index(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    /// Resolve a request path to the file to transmit.
    ///
    /// Missing files and directories resolve to the entry document so that
    /// client-side routes keep working; only stat failures other than
    /// not-found are surfaced.
    fn resolve(&self, request_path: &str) -> Result<PathBuf, std::io::Error> {
        let Some(relative) = sanitize_request_path(request_path) else {
            return Ok(self.index());
        };

        let candidate = self.root.join(relative);
        match std::fs::metadata(&candidate) {
            Ok(metadata) if metadata.is_dir() => Ok(self.index()),
            Ok(_) => Ok(candidate),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.index()),
            Err(e) => Err(e),
        }
    }
}

/// Keep only plain path segments. Anything that could climb out of the asset
/// root marks the whole path unresolvable.
fn sanitize_request_path(request_path: &str) -> Option<PathBuf> {
    let mut sanitized = PathBuf::new();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(segment) => sanitized.push(segment),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if sanitized.as_os_str().is_empty() {
        None
    } else {
        Some(sanitized)
    }
}

#[tracing::instrument(
    name = "Serve a static asset",
    skip(request, assets),
    fields(request_path = %request.path())
)]
pub async fn serve_spa(
    request: HttpRequest,
    assets: web::Data<SpaAssets>,
) -> Result<HttpResponse, actix_web::Error> {
    let path = assets.resolve(request.path()).map_err(e500)?;
    let file = NamedFile::open(path).map_err(e500)?;
    Ok(file.into_response(&request))
}
