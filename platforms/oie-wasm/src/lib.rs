use oie_engine::{Extractor, ExtractorConfig, Report};
use oie_protocol::{Sentence, Treebank};
use rkyv::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The extractor running in the browser.
#[wasm_bindgen]
pub struct OieEngine {
    extractor: Extractor,
}

#[wasm_bindgen]
impl OieEngine {
    /// `config` is a plain object with any of the `ExtractorConfig` fields, or
    /// `undefined` for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<OieEngine, JsError> {
        let config: ExtractorConfig = if config.is_undefined() || config.is_null() {
            ExtractorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
        };
        Ok(Self {
            extractor: Extractor::new(config),
        })
    }

    /// CoNLL-U text -> `{ config, sentences: [{ sentence, extractions, debug?, error? }] }`
    pub fn analyze(&self, conllu: &str) -> Result<JsValue, JsError> {
        let treebank = oie_conllu::read_treebank(conllu)?;
        self.respond(treebank.sentences)
    }

    /// Same as [`analyze`](Self::analyze), for a treebank compiled by the CLI
    /// and fetched as bytes.
    pub fn analyze_archive(&self, data: &[u8]) -> Result<JsValue, JsError> {
        let treebank = load_archive(data).map_err(|e| JsError::new(&e))?;
        self.respond(treebank.sentences)
    }
}

/// Validates and deserializes an archive written by `oie compile`.
fn load_archive(data: &[u8]) -> Result<Treebank, String> {
    let archived = rkyv::check_archived_root::<Treebank>(data)
        .map_err(|e| format!("corrupt treebank archive: {}", e))?;
    let treebank: Treebank = archived
        .deserialize(&mut rkyv::Infallible)
        .map_err(|_| "cannot deserialize treebank archive".to_string())?;
    if treebank.version != Treebank::VERSION {
        return Err(format!(
            "treebank archive has version {}, expected {}",
            treebank.version,
            Treebank::VERSION
        ));
    }
    Ok(treebank)
}

impl OieEngine {
    fn report(&self, sentences: Vec<Sentence>) -> Report {
        self.extractor.report_all(sentences)
    }

    fn respond(&self, sentences: Vec<Sentence>) -> Result<JsValue, JsError> {
        let report = self.report(sentences);
        serde_wasm_bindgen::to_value(&report).map_err(|e| JsError::new(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::ser::{serializers::AllocSerializer, Serializer};

    const SENTENCE: &str = "
1 João João PROPN _ _ 2 nsubj
2 comeu comer VERB _ _ 0 root
3 maçãs maçã NOUN _ _ 2 obj
";

    fn engine() -> OieEngine {
        OieEngine {
            extractor: Extractor::default(),
        }
    }

    fn archive(treebank: &Treebank) -> rkyv::AlignedVec {
        let mut serializer = AllocSerializer::<256>::default();
        serializer.serialize_value(treebank).unwrap();
        serializer.into_serializer().into_inner()
    }

    #[test]
    fn test_report_from_archive_bytes() {
        let treebank = oie_conllu::read_treebank(SENTENCE).unwrap();
        let restored = load_archive(&archive(&treebank)).unwrap();
        let report = engine().report(restored.sentences);

        assert_eq!(report.sentences.len(), 1);
        let triple = &report.sentences[0].extractions[0];
        assert_eq!((triple.arg1.as_str(), triple.rel.as_str(), triple.arg2.as_str()), ("João", "comeu", "maçãs"));
    }

    #[test]
    fn test_archive_version_mismatch_is_rejected() {
        let mut treebank = oie_conllu::read_treebank(SENTENCE).unwrap();
        treebank.version = Treebank::VERSION + 1;
        let error = load_archive(&archive(&treebank)).unwrap_err();
        assert!(error.contains("version"));

        assert!(load_archive(&[0u8; 3]).is_err());
    }
}
