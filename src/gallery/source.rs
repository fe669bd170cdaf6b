use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{PageError, PageResult},
    gallery::loader::{FetchResponse, ManifestRequest},
};

/// Something that can resolve a [`ManifestRequest`] into a response.
///
/// Network-level failures are `Err`; a reachable server answering with an error status is
/// `Ok` with that status.
pub trait ManifestSource {
    fn fetch(&self, request: &ManifestRequest) -> PageResult<FetchResponse>;
}

impl<F> ManifestSource for F
where
    F: Fn(&ManifestRequest) -> PageResult<FetchResponse>,
{
    fn fetch(&self, request: &ManifestRequest) -> PageResult<FetchResponse> {
        self(request)
    }
}

/// Serves requests from a local directory laid out like the static site root.
///
/// `/data/gallery.json` resolves to `<root>/data/gallery.json`. Missing files answer 404.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, location: &str) -> PageResult<PathBuf> {
        let rel = normalize_location(location)?;
        Ok(self.root.join(rel))
    }
}

impl ManifestSource for DirSource {
    fn fetch(&self, request: &ManifestRequest) -> PageResult<FetchResponse> {
        let path = self.resolve(&request.location)?;
        match std::fs::read(&path) {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                body: Vec::new(),
            }),
            Err(e) => Err(PageError::Other(anyhow::Error::new(e).context(format!(
                "read manifest '{}'",
                path.display()
            )))),
        }
    }
}

/// Turn a site-absolute location into a relative path without `.` or `..` segments.
pub(crate) fn normalize_location(location: &str) -> PageResult<String> {
    let s = location.replace('\\', "/");
    let s = s.split(['?', '#']).next().unwrap_or_default();

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(PageError::validation(
                "manifest location must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(PageError::validation(
            "manifest location must contain a file name",
        ));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/source.rs"]
mod tests;
