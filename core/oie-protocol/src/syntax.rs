use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::String;
use bitflags::bitflags;
use core::fmt;

/// Universal Dependencies relations, with the subtypes the extractor tells apart.
///
/// The discriminant doubles as the bit position inside [`DepSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", from = "String"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum DepRel {
    Nsubj = 0,
    NsubjPass = 1,
    Csubj = 2,
    CsubjPass = 3,
    Obj = 4,
    Iobj = 5,
    Obl = 6,
    OblAgent = 7,
    Vocative = 8,
    Expl = 9,
    ExplPv = 10,
    ExplPass = 11,
    Dislocated = 12,
    Advcl = 13,
    Advmod = 14,
    Discourse = 15,
    Aux = 16,
    AuxPass = 17,
    Cop = 18,
    Mark = 19,
    Nmod = 20,
    Appos = 21,
    Nummod = 22,
    Acl = 23,
    AclRelcl = 24,
    Amod = 25,
    Det = 26,
    Clf = 27,
    Case = 28,
    Conj = 29,
    Cc = 30,
    Fixed = 31,
    Flat = 32,
    FlatName = 33,
    Compound = 34,
    List = 35,
    Parataxis = 36,
    Orphan = 37,
    Goeswith = 38,
    Reparandum = 39,
    Punct = 40,
    Root = 41,
    Dep = 42,
    Xcomp = 43,
    Ccomp = 44,
    Other = 45,
}

impl DepRel {
    /// Parses a `DEPREL` label.
    ///
    /// Known subtypes map to their own variant, unknown subtypes fall back to the
    /// base relation (`nmod:poss` is `Nmod`, `acl:part` is `Acl`) and unknown
    /// relations become `Other`. Legacy Stanford names are accepted too.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        if let Some(rel) = Self::exact(&lower) {
            return rel;
        }
        match lower.split_once(':') {
            Some((base, _)) => Self::exact(base).unwrap_or(Self::Other),
            None => Self::Other,
        }
    }

    fn exact(label: &str) -> Option<Self> {
        let rel = match label {
            "nsubj" => Self::Nsubj,
            "nsubj:pass" | "nsubjpass" => Self::NsubjPass,
            "csubj" => Self::Csubj,
            "csubj:pass" | "csubjpass" => Self::CsubjPass,
            "obj" | "dobj" => Self::Obj,
            "iobj" => Self::Iobj,
            "obl" => Self::Obl,
            "obl:agent" => Self::OblAgent,
            "vocative" => Self::Vocative,
            "expl" => Self::Expl,
            "expl:pv" => Self::ExplPv,
            "expl:pass" => Self::ExplPass,
            "dislocated" => Self::Dislocated,
            "advcl" => Self::Advcl,
            "advmod" => Self::Advmod,
            "discourse" => Self::Discourse,
            "aux" => Self::Aux,
            "aux:pass" | "auxpass" => Self::AuxPass,
            "cop" => Self::Cop,
            "mark" => Self::Mark,
            "nmod" => Self::Nmod,
            "appos" => Self::Appos,
            "nummod" => Self::Nummod,
            "acl" => Self::Acl,
            "acl:relcl" | "relcl" => Self::AclRelcl,
            "amod" => Self::Amod,
            "det" => Self::Det,
            "clf" => Self::Clf,
            "case" => Self::Case,
            "conj" => Self::Conj,
            "cc" => Self::Cc,
            "fixed" => Self::Fixed,
            "flat" => Self::Flat,
            "flat:name" => Self::FlatName,
            "compound" => Self::Compound,
            "list" => Self::List,
            "parataxis" => Self::Parataxis,
            "orphan" => Self::Orphan,
            "goeswith" => Self::Goeswith,
            "reparandum" => Self::Reparandum,
            "punct" => Self::Punct,
            "root" => Self::Root,
            "dep" => Self::Dep,
            "xcomp" => Self::Xcomp,
            "ccomp" => Self::Ccomp,
            _ => return None,
        };
        Some(rel)
    }

    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Nsubj => "nsubj",
            Self::NsubjPass => "nsubj:pass",
            Self::Csubj => "csubj",
            Self::CsubjPass => "csubj:pass",
            Self::Obj => "obj",
            Self::Iobj => "iobj",
            Self::Obl => "obl",
            Self::OblAgent => "obl:agent",
            Self::Vocative => "vocative",
            Self::Expl => "expl",
            Self::ExplPv => "expl:pv",
            Self::ExplPass => "expl:pass",
            Self::Dislocated => "dislocated",
            Self::Advcl => "advcl",
            Self::Advmod => "advmod",
            Self::Discourse => "discourse",
            Self::Aux => "aux",
            Self::AuxPass => "aux:pass",
            Self::Cop => "cop",
            Self::Mark => "mark",
            Self::Nmod => "nmod",
            Self::Appos => "appos",
            Self::Nummod => "nummod",
            Self::Acl => "acl",
            Self::AclRelcl => "acl:relcl",
            Self::Amod => "amod",
            Self::Det => "det",
            Self::Clf => "clf",
            Self::Case => "case",
            Self::Conj => "conj",
            Self::Cc => "cc",
            Self::Fixed => "fixed",
            Self::Flat => "flat",
            Self::FlatName => "flat:name",
            Self::Compound => "compound",
            Self::List => "list",
            Self::Parataxis => "parataxis",
            Self::Orphan => "orphan",
            Self::Goeswith => "goeswith",
            Self::Reparandum => "reparandum",
            Self::Punct => "punct",
            Self::Root => "root",
            Self::Dep => "dep",
            Self::Xcomp => "xcomp",
            Self::Ccomp => "ccomp",
            Self::Other => "_",
        }
    }

    /// The single-member set holding this relation.
    pub const fn as_set(self) -> DepSet {
        DepSet::from_bits_retain(1u64 << (self as u8))
    }

    pub const fn is_in(self, set: DepSet) -> bool {
        set.contains(self.as_set())
    }
}

impl From<String> for DepRel {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<DepRel> for &'static str {
    fn from(rel: DepRel) -> Self {
        rel.as_label()
    }
}

impl fmt::Display for DepRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

bitflags! {
    /// A set of dependency relations; bit `n` is the `DepRel` with discriminant `n`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct DepSet: u64 {
        // Core arguments (Bits 0-8)
        const NSUBJ = 1 << 0;
        const NSUBJ_PASS = 1 << 1;
        const CSUBJ = 1 << 2;
        const CSUBJ_PASS = 1 << 3;
        const OBJ = 1 << 4;
        const IOBJ = 1 << 5;
        const OBL = 1 << 6;
        const OBL_AGENT = 1 << 7;
        const VOCATIVE = 1 << 8;

        // Expletives and clause dependents (Bits 9-19)
        const EXPL = 1 << 9;
        const EXPL_PV = 1 << 10;
        const EXPL_PASS = 1 << 11;
        const DISLOCATED = 1 << 12;
        const ADVCL = 1 << 13;
        const ADVMOD = 1 << 14;
        const DISCOURSE = 1 << 15;
        const AUX = 1 << 16;
        const AUX_PASS = 1 << 17;
        const COP = 1 << 18;
        const MARK = 1 << 19;

        // Nominal dependents (Bits 20-28)
        const NMOD = 1 << 20;
        const APPOS = 1 << 21;
        const NUMMOD = 1 << 22;
        const ACL = 1 << 23;
        const ACL_RELCL = 1 << 24;
        const AMOD = 1 << 25;
        const DET = 1 << 26;
        const CLF = 1 << 27;
        const CASE = 1 << 28;

        // Coordination, multi-word units, loose relations (Bits 29-45)
        const CONJ = 1 << 29;
        const CC = 1 << 30;
        const FIXED = 1 << 31;
        const FLAT = 1 << 32;
        const FLAT_NAME = 1 << 33;
        const COMPOUND = 1 << 34;
        const LIST = 1 << 35;
        const PARATAXIS = 1 << 36;
        const ORPHAN = 1 << 37;
        const GOESWITH = 1 << 38;
        const REPARANDUM = 1 << 39;
        const PUNCT = 1 << 40;
        const ROOT = 1 << 41;
        const DEP = 1 << 42;
        const XCOMP = 1 << 43;
        const CCOMP = 1 << 44;
        const OTHER = 1 << 45;
    }
}

impl From<DepRel> for DepSet {
    fn from(rel: DepRel) -> Self {
        rel.as_set()
    }
}
