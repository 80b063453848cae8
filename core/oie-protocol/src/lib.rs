#![no_std] // Shared with the WASM platform

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod morphology;
pub mod syntax;

// Re-export core types for convenience
pub use ids::{SentenceId, TokenId};
pub use morphology::*;
pub use syntax::*;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    fn token(id: u32, form: &str, upos: PartOfSpeech, head: u32, deprel: DepRel) -> Token {
        Token {
            id: TokenId(id),
            form: form.to_string(),
            lemma: form.to_string(),
            upos,
            xpos: None,
            feats: Features::new(),
            head,
            deprel,
            space_after: true,
        }
    }

    #[test]
    fn test_enum_serialization() {
        let original = DepRel::NsubjPass;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize DepRel");
        let deserialized: DepRel = from_bytes(&bytes).expect("Failed to deserialize DepRel");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_sentence_serialization() {
        let mut feats = Features::new();
        feats.insert("Voice", "Pass");
        let mut built = token(2, "construída", PartOfSpeech::Verb, 0, DepRel::Root);
        built.feats = feats;

        let original = Sentence {
            id: SentenceId(7),
            text: Some("Foi construída".to_string()),
            tokens: vec![token(1, "Foi", PartOfSpeech::Auxiliary, 2, DepRel::AuxPass), built],
        };

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize Sentence");
        let deserialized: Sentence = from_bytes(&bytes).expect("Failed to deserialize Sentence");

        assert_eq!(original, deserialized);
        assert!(deserialized.tokens[1].feats.contains("Voice", "Pass"));
    }

    #[test]
    fn test_id_layout() {
        // TokenId(u32) should be exactly 4 bytes
        assert_eq!(core::mem::size_of::<TokenId>(), 4);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(DepRel::from_label("nsubj:pass"), DepRel::NsubjPass);
        assert_eq!(DepRel::from_label("ROOT"), DepRel::Root);
        assert_eq!(DepRel::from_label("nmod:poss"), DepRel::Nmod);
        assert_eq!(DepRel::from_label("acl:part"), DepRel::Acl);
        assert_eq!(DepRel::from_label("dobj"), DepRel::Obj);
        assert_eq!(DepRel::from_label("weird"), DepRel::Other);
        assert_eq!(PartOfSpeech::from_tag("propn"), PartOfSpeech::ProperNoun);
        assert_eq!(PartOfSpeech::from_tag("???"), PartOfSpeech::Other);
    }

    #[test]
    fn test_label_bits_match_flag_names() {
        // The discriminant is the bit position; spot-check both ends and the middle.
        assert_eq!(DepRel::Nsubj.as_set(), DepSet::NSUBJ);
        assert_eq!(DepRel::ExplPv.as_set(), DepSet::EXPL_PV);
        assert_eq!(DepRel::Case.as_set(), DepSet::CASE);
        assert_eq!(DepRel::FlatName.as_set(), DepSet::FLAT_NAME);
        assert_eq!(DepRel::Ccomp.as_set(), DepSet::CCOMP);
        assert_eq!(DepRel::Other.as_set(), DepSet::OTHER);

        let clauses = DepSet::ADVCL | DepSet::CCOMP;
        assert!(DepRel::Advcl.is_in(clauses));
        assert!(!DepRel::Xcomp.is_in(clauses));
    }

    #[test]
    fn test_features_are_sorted_sets() {
        let mut feats = Features::new();
        feats.insert("PronType", "Rel");
        feats.insert("Gender", "Masc");
        feats.insert("Gender", "Fem");
        feats.insert("Gender", "Masc");

        assert_eq!(feats.len(), 2);
        assert!(feats.contains("PronType", "Rel"));
        assert!(!feats.contains("PronType", "Dem"));
        assert_eq!(feats.get("Gender").map(|v| v.len()), Some(2));
        assert_eq!(feats.to_string(), "Gender=Fem,Masc|PronType=Rel");
        assert_eq!(Features::new().to_string(), "_");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_features_from_json_in_any_order() {
        let json = r#"{"entries":[["Voice",["Pass"]],["PronType",["Rel"]],["Gender",["Masc","Fem"]]]}"#;
        let feats: Features = serde_json::from_str(json).expect("Failed to parse Features");

        assert!(feats.contains("Voice", "Pass"));
        assert!(feats.contains("PronType", "Rel"));
        assert_eq!(feats.to_string(), "Gender=Fem,Masc|PronType=Rel|Voice=Pass");

        let mut expected = Features::new();
        expected.insert("Voice", "Pass");
        expected.insert("PronType", "Rel");
        expected.insert("Gender", "Masc");
        expected.insert("Gender", "Fem");
        assert_eq!(feats, expected);
    }

    #[test]
    fn test_surface_text_honors_space_after() {
        let mut first = token(1, "Chegou", PartOfSpeech::Verb, 0, DepRel::Root);
        first.space_after = false;
        let sentence = Sentence {
            id: SentenceId(1),
            text: None,
            tokens: vec![first, token(2, ".", PartOfSpeech::Punctuation, 1, DepRel::Punct)],
        };
        assert_eq!(sentence.surface_text(), "Chegou.");
    }
}
