//! Loading messages from configuration data and locale directories

use crate::catalog::Catalog;
use crate::config::LanguageEntry;
use crate::decoder::DecoderRegistry;
use crate::error::{I18nError, I18nResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Outcome of a directory scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Files whose messages were merged into the catalog
    pub loaded: usize,
    /// Files skipped because they could not be read, resolved or decoded
    pub skipped: usize,
}

/// Merges translation sources into a [`Catalog`]
#[derive(Debug)]
pub struct CatalogLoader<'a> {
    catalog: &'a mut Catalog,
}

impl<'a> CatalogLoader<'a> {
    /// Create a loader writing into `catalog`
    pub fn new(catalog: &'a mut Catalog) -> Self {
        Self { catalog }
    }

    /// Merge inline language entries in order
    pub fn load_entries(&mut self, entries: &[LanguageEntry]) {
        for entry in entries {
            self.catalog.merge(
                entry.language.as_str(),
                entry
                    .messages
                    .iter()
                    .map(|message| (message.key.as_str(), message.value.as_str())),
            );
            debug!(
                "Loaded {} inline messages for locale: {}",
                entry.messages.len(),
                entry.language
            );
        }
    }

    /// Merge every `<locale>.<extension>` file found under `root`.
    ///
    /// A failure to walk the directory aborts the load. Files that cannot be
    /// read, have no decoder or fail to decode are logged and skipped.
    pub fn load_dir(
        &mut self,
        root: impl AsRef<Path>,
        decoders: &DecoderRegistry,
    ) -> I18nResult<LoadSummary> {
        let root = root.as_ref();
        debug!("Scanning locale directory: {:?}", root);

        let entries = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| I18nError::DirectoryWalk {
                path: root.to_path_buf(),
                source,
            })?;

        let mut summary = LoadSummary::default();
        for entry in entries.iter().filter(|entry| !entry.file_type().is_dir()) {
            match self.load_file(entry.path(), decoders) {
                Ok(()) => summary.loaded += 1,
                Err(e) => {
                    warn!("Skipping locale file {:?}: {}", entry.path(), e);
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "Loaded {} locale files from {:?} ({} skipped)",
            summary.loaded, root, summary.skipped
        );
        Ok(summary)
    }

    /// Decode a single locale file and merge it into the catalog
    fn load_file(&mut self, path: &Path, decoders: &DecoderRegistry) -> I18nResult<()> {
        let (locale, extension) = locale_and_extension(path)?;

        let content = fs::read(path).map_err(|source| I18nError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let messages = decoders
            .resolve(&extension)?
            .decode(&content)
            .map_err(|source| I18nError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            "Loaded {} messages for locale {} from {:?}",
            messages.len(),
            locale,
            path
        );
        self.catalog.merge(locale, messages);
        Ok(())
    }
}

/// Split `dir/en.json` into (`en`, `json`).
///
/// Only the final extension is removed, so `en.US.json` yields `en.US`.
fn locale_and_extension(path: &Path) -> I18nResult<(String, String)> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.rsplit_once('.') {
        Some((locale, extension)) if !locale.is_empty() => {
            Ok((locale.to_string(), extension.to_string()))
        }
        _ => Err(I18nError::InvalidFileName {
            path: path.to_path_buf(),
        }),
    }
}
