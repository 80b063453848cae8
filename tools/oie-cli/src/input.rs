use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use clap::ValueEnum;
use oie_protocol::Treebank;
use rkyv::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// CoNLL-U text
    Conllu,
    /// A serialized `Treebank` as JSON
    Json,
    /// A treebank compiled with `oie compile`
    Archive,
}

impl InputFormat {
    /// Guesses the format from the file extension.
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "conllu" | "conll" | "txt" => Some(Self::Conllu),
            "json" => Some(Self::Json),
            "rkyv" | "bin" => Some(Self::Archive),
            _ => None,
        }
    }
}

pub fn load_treebank(path: &Path, format: Option<InputFormat>) -> anyhow::Result<Treebank> {
    let Some(format) = format.or_else(|| InputFormat::detect(path)) else {
        bail!("cannot tell the format of {:?}; pass --format", path);
    };
    info!(?path, ?format, "reading treebank");

    let treebank = match format {
        InputFormat::Conllu => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
            oie_conllu::read_treebank(&text)?
        }
        InputFormat::Json => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {:?}", path))?
        }
        InputFormat::Archive => {
            let bytes = fs::read(path).with_context(|| format!("reading {:?}", path))?;
            let archived = rkyv::check_archived_root::<Treebank>(&bytes)
                .map_err(|e| anyhow!("corrupt treebank archive {:?}: {}", path, e))?;
            let treebank: Treebank = archived
                .deserialize(&mut rkyv::Infallible)
                .map_err(|_| anyhow!("cannot deserialize {:?}", path))?;
            if treebank.version != Treebank::VERSION {
                bail!(
                    "archive {:?} has version {}, expected {}",
                    path,
                    treebank.version,
                    Treebank::VERSION
                );
            }
            treebank
        }
    };

    info!(sentences = treebank.sentences.len(), "treebank loaded");
    Ok(treebank)
}
