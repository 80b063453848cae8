//! Hand-annotated sentences shared by the unit tests.

use oie_tree::DependencyTree;

use crate::{Extractor, ExtractorConfig, Triple};

pub(crate) fn tree(conllu: &str) -> DependencyTree {
    let sentence = oie_conllu::parse_sentence(conllu).expect("fixture parses");
    DependencyTree::build(sentence).expect("fixture is a tree")
}

pub(crate) fn triples_with(config: ExtractorConfig, conllu: &str) -> Vec<(String, String, String)> {
    Extractor::new(config)
        .triples(&tree(conllu))
        .into_iter()
        .map(|Triple { arg1, rel, arg2 }| (arg1, rel, arg2))
        .collect()
}

pub(crate) fn triples(conllu: &str) -> Vec<(String, String, String)> {
    triples_with(ExtractorConfig::default(), conllu)
}

pub(crate) fn triple(arg1: &str, rel: &str, arg2: &str) -> (String, String, String) {
    (arg1.to_string(), rel.to_string(), arg2.to_string())
}

pub(crate) const TRANSITIVE: &str = "
1 João João PROPN _ _ 2 nsubj
2 comeu comer VERB _ _ 0 root
3 a o DET _ _ 4 det
4 maçã maçã NOUN _ _ 2 obj
5 . . PUNCT _ _ 2 punct
";

pub(crate) const PASSIVE: &str = "
1 a o DET _ _ 2 det
2 ponte ponte NOUN _ _ 4 nsubj:pass
3 foi ser AUX _ _ 4 aux:pass
4 construída construir VERB _ Voice=Pass 0 root
5 . . PUNCT _ _ 4 punct
";

pub(crate) const COORDINATED_VERBS: &str = "
1 o o DET _ _ 2 det
2 cão cão NOUN _ _ 3 nsubj
3 correu correr VERB _ _ 0 root
4 e e CCONJ _ _ 5 cc
5 saltou saltar VERB _ _ 3 conj
6 . . PUNCT _ _ 3 punct
";

pub(crate) const APPOSITION: &str = "
1 Maria Maria PROPN _ _ 6 nsubj
2 , , PUNCT _ _ 4 punct
3 a o DET _ _ 4 det
4 professora professora NOUN _ _ 1 appos
5 , , PUNCT _ _ 4 punct
6 chegou chegar VERB _ _ 0 root
7 . . PUNCT _ _ 6 punct
";

pub(crate) const COPULA_COORDINATION: &str = "
1 Maria Maria PROPN _ _ 4 nsubj
2 não não ADV _ Polarity=Neg 4 advmod
3 é ser AUX _ _ 4 cop
4 bonita bonito ADJ _ _ 0 root
5 e e CCONJ _ _ 6 cc
6 inteligente inteligente ADJ _ _ 4 conj
7 . . PUNCT _ _ 4 punct
";

pub(crate) const OBJECT_COORDINATION: &str = "
1 João João PROPN _ _ 2 nsubj
2 comprou comprar VERB _ _ 0 root
3 maçãs maçã NOUN _ _ 2 obj
4 , , PUNCT _ _ 5 punct
5 peras pera NOUN _ _ 3 conj
6 e e CCONJ _ _ 7 cc
7 uvas uva NOUN _ _ 3 conj
8 . . PUNCT _ _ 2 punct
";

pub(crate) const SHARED_CASE: &str = "
1 Ele ele PRON _ _ 2 nsubj
2 gosta gostar VERB _ _ 0 root
3 de de ADP _ _ 4 case
4 Ana Ana PROPN _ _ 2 obl
5 e e CCONJ _ _ 6 cc
6 Rui Rui PROPN _ _ 4 conj
7 . . PUNCT _ _ 2 punct
";

pub(crate) const RELATIVE_CLAUSE: &str = "
1 O o DET _ _ 2 det
2 homem homem NOUN _ _ 6 nsubj
3 que que PRON _ PronType=Rel 4 nsubj
4 chegou chegar VERB _ _ 2 acl:relcl
5 é ser AUX _ _ 6 cop
6 alto alto ADJ _ _ 0 root
7 . . PUNCT _ _ 6 punct
";

pub(crate) const CLAUSAL_SUBJECT: &str = "
1 Correr correr VERB _ VerbForm=Inf 3 csubj
2 é ser AUX _ _ 3 cop
3 saudável saudável ADJ _ _ 0 root
4 . . PUNCT _ _ 3 punct
";

pub(crate) const EXISTENTIAL: &str = "
1 Há haver VERB _ _ 0 root
2 muitos muito DET _ _ 3 det
3 problemas problema NOUN _ _ 1 obj
4 . . PUNCT _ _ 1 punct
";

pub(crate) const REPORTED_APPOSITION: &str = "
1 Ele ele PRON _ _ 2 nsubj
2 disse dizer VERB _ _ 0 root
3 que que SCONJ _ _ 5 mark
4 Rui Rui PROPN _ _ 5 nsubj
5 viu ver VERB _ _ 2 ccomp
6 Ana Ana PROPN _ _ 5 obj
7 , , PUNCT _ _ 9 punct
8 a o DET _ _ 9 det
9 vizinha vizinha NOUN _ _ 6 appos
10 . . PUNCT _ _ 2 punct
";

pub(crate) const CONTROL_VERB: &str = "
1 João João PROPN _ _ 2 nsubj
2 começou começar VERB _ _ 0 root
3 a a ADP _ _ 4 mark
4 estudar estudar VERB _ VerbForm=Inf 2 xcomp
5 música música NOUN _ _ 4 obj
6 . . PUNCT _ _ 2 punct
";

pub(crate) const ADVERBIAL_CLAUSE: &str = "
1 Ele ele PRON _ _ 2 nsubj
2 saiu sair VERB _ _ 0 root
3 para para ADP _ _ 4 mark
4 comprar comprar VERB _ VerbForm=Inf 2 advcl
5 pão pão NOUN _ _ 4 obj
6 . . PUNCT _ _ 2 punct
";

pub(crate) const HIDDEN_SUBJECT: &str = "
1 Chegamos chegar VERB _ _ 0 root
2 a a ADP _ _ 3 case
3 casa casa NOUN _ _ 1 obl
4 . . PUNCT _ _ 1 punct
";

pub(crate) const APPOSITION_CHAIN: &str = "
1 Ana Ana PROPN _ _ 7 nsubj
2 , , PUNCT _ _ 3 punct
3 diretora diretora NOUN _ _ 1 appos
4 , , PUNCT _ _ 5 punct
5 engenheira engenheira NOUN _ _ 3 appos
6 , , PUNCT _ _ 5 punct
7 venceu vencer VERB _ _ 0 root
8 . . PUNCT _ _ 7 punct
";

pub(crate) const INVERTED_COPULA: &str = "
1 Feliz feliz ADJ _ _ 0 root
2 tem ter AUX _ _ 1 aux
3 sido ser X _ _ 1 cop
4 Maria Maria PROPN _ _ 1 nsubj
5 . . PUNCT _ _ 1 punct
";

pub(crate) const UNTAGGED_COPULA: &str = "
1 Maria Maria PROPN _ _ 3 nsubj
2 é ser X _ _ 3 cop
3 feliz feliz ADJ _ _ 0 root
4 . . PUNCT _ _ 3 punct
";
