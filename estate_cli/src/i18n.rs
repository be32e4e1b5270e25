//! Localized labels for the report.
//!
//! The language is chosen per run (flag or config file) and passed to the
//! renderer; the calculator itself only ever produces English labels plus the
//! language-neutral [`HeirKind`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use estate_core::{HeirKind, HeirRecord, Relationship};

/// Share label the calculator uses for a residuary heir
const RESIDUE_SHARE: &str = "Residue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    Arabic,
    Bahasa,
    Malay,
    Urdu,
    Hindi,
    Bangla,
}

/// Fixed report strings in one language
pub struct Labels {
    pub title: &'static str,
    pub net_estate: &'static str,
    pub heir: &'static str,
    pub relationship: &'static str,
    pub share: &'static str,
    pub amount: &'static str,
    pub no_heirs: &'static str,
    pub unallocated: &'static str,
    pub residue: &'static str,
}

const ENGLISH: Labels = Labels {
    title: "Inheritance Calculation",
    net_estate: "Net Estate",
    heir: "Heir",
    relationship: "Relationship",
    share: "Share",
    amount: "Amount",
    no_heirs: "No eligible heirs",
    unallocated: "Unallocated",
    residue: "Residue",
};

const FRENCH: Labels = Labels {
    title: "Calcul de l'héritage",
    net_estate: "Succession nette",
    heir: "Héritier",
    relationship: "Lien de parenté",
    share: "Part",
    amount: "Montant",
    no_heirs: "Aucun héritier éligible",
    unallocated: "Non attribué",
    residue: "Reliquat",
};

const ARABIC: Labels = Labels {
    title: "حساب الميراث",
    net_estate: "صافي التركة",
    heir: "الوارث",
    relationship: "صلة القرابة",
    share: "النصيب",
    amount: "المبلغ",
    no_heirs: "لا يوجد ورثة مستحقون",
    unallocated: "غير موزع",
    residue: "الباقي",
};

const BAHASA: Labels = Labels {
    title: "Perhitungan Warisan",
    net_estate: "Harta Bersih",
    heir: "Ahli Waris",
    relationship: "Hubungan",
    share: "Bagian",
    amount: "Jumlah",
    no_heirs: "Tidak ada ahli waris yang berhak",
    unallocated: "Tidak terbagi",
    residue: "Sisa",
};

const MALAY: Labels = Labels {
    title: "Pengiraan Pusaka",
    net_estate: "Harta Bersih",
    heir: "Waris",
    relationship: "Hubungan",
    share: "Bahagian",
    amount: "Jumlah",
    no_heirs: "Tiada waris yang layak",
    unallocated: "Tidak diagihkan",
    residue: "Baki",
};

const URDU: Labels = Labels {
    title: "وراثت کا حساب",
    net_estate: "خالص ترکہ",
    heir: "وارث",
    relationship: "رشتہ",
    share: "حصہ",
    amount: "رقم",
    no_heirs: "کوئی مستحق وارث نہیں",
    unallocated: "غیر تقسیم شدہ",
    residue: "باقی",
};

const HINDI: Labels = Labels {
    title: "विरासत की गणना",
    net_estate: "शुद्ध संपत्ति",
    heir: "वारिस",
    relationship: "संबंध",
    share: "हिस्सा",
    amount: "राशि",
    no_heirs: "कोई पात्र वारिस नहीं",
    unallocated: "अवितरित",
    residue: "शेष",
};

const BANGLA: Labels = Labels {
    title: "উত্তরাধিকার হিসাব",
    net_estate: "নিট সম্পত্তি",
    heir: "উত্তরাধিকারী",
    relationship: "সম্পর্ক",
    share: "অংশ",
    amount: "পরিমাণ",
    no_heirs: "কোনো যোগ্য উত্তরাধিকারী নেই",
    unallocated: "অবণ্টিত",
    residue: "অবশিষ্ট",
};

impl Language {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::French => &FRENCH,
            Language::Arabic => &ARABIC,
            Language::Bahasa => &BAHASA,
            Language::Malay => &MALAY,
            Language::Urdu => &URDU,
            Language::Hindi => &HINDI,
            Language::Bangla => &BANGLA,
        }
    }

    /// Right-to-left script
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic | Language::Urdu)
    }

    pub fn heir_kind(&self, kind: HeirKind) -> &'static str {
        use HeirKind::*;
        match self {
            Language::English => kind.label(),
            Language::French => match kind {
                Wife => "Épouse",
                Husband => "Époux",
                Father => "Père",
                Mother => "Mère",
                Son => "Fils",
                Daughter => "Fille",
                Brother => "Frère",
                Sister => "Sœur",
            },
            Language::Arabic => match kind {
                Wife => "زوجة",
                Husband => "زوج",
                Father => "أب",
                Mother => "أم",
                Son => "ابن",
                Daughter => "بنت",
                Brother => "أخ",
                Sister => "أخت",
            },
            Language::Bahasa => match kind {
                Wife => "Istri",
                Husband => "Suami",
                Father => "Ayah",
                Mother => "Ibu",
                Son => "Anak Laki-laki",
                Daughter => "Anak Perempuan",
                Brother => "Saudara Laki-laki",
                Sister => "Saudara Perempuan",
            },
            Language::Malay => match kind {
                Wife => "Isteri",
                Husband => "Suami",
                Father => "Bapa",
                Mother => "Ibu",
                Son => "Anak Lelaki",
                Daughter => "Anak Perempuan",
                Brother => "Saudara Lelaki",
                Sister => "Saudara Perempuan",
            },
            Language::Urdu => match kind {
                Wife => "بیوی",
                Husband => "شوہر",
                Father => "والد",
                Mother => "والدہ",
                Son => "بیٹا",
                Daughter => "بیٹی",
                Brother => "بھائی",
                Sister => "بہن",
            },
            Language::Hindi => match kind {
                Wife => "पत्नी",
                Husband => "पति",
                Father => "पिता",
                Mother => "माता",
                Son => "बेटा",
                Daughter => "बेटी",
                Brother => "भाई",
                Sister => "बहन",
            },
            Language::Bangla => match kind {
                Wife => "স্ত্রী",
                Husband => "স্বামী",
                Father => "পিতা",
                Mother => "মাতা",
                Son => "পুত্র",
                Daughter => "কন্যা",
                Brother => "ভাই",
                Sister => "বোন",
            },
        }
    }

    pub fn relationship(&self, relationship: Relationship) -> &'static str {
        use Relationship::*;
        match self {
            Language::English => relationship.label(),
            Language::French => match relationship {
                Spouse => "Conjoint",
                Parent => "Parent",
                Child => "Enfant",
                Sibling => "Fratrie",
            },
            Language::Arabic => match relationship {
                Spouse => "الزوجية",
                Parent => "الأبوة",
                Child => "البنوة",
                Sibling => "الأخوة",
            },
            Language::Bahasa => match relationship {
                Spouse => "Pasangan",
                Parent => "Orang Tua",
                Child => "Anak",
                Sibling => "Saudara",
            },
            Language::Malay => match relationship {
                Spouse => "Pasangan",
                Parent => "Ibu Bapa",
                Child => "Anak",
                Sibling => "Adik-beradik",
            },
            Language::Urdu => match relationship {
                Spouse => "زوجیت",
                Parent => "والدین",
                Child => "اولاد",
                Sibling => "بہن بھائی",
            },
            Language::Hindi => match relationship {
                Spouse => "जीवनसाथी",
                Parent => "माता-पिता",
                Child => "संतान",
                Sibling => "भाई-बहन",
            },
            Language::Bangla => match relationship {
                Spouse => "দাম্পত্য",
                Parent => "পিতামাতা",
                Child => "সন্তান",
                Sibling => "ভাইবোন",
            },
        }
    }

    /// Localized display name, numbered like the English one ("Fils 2")
    pub fn heir_name(&self, record: &HeirRecord) -> String {
        let base = self.heir_kind(record.heir);
        match record.ordinal {
            Some(n) => format!("{base} {n}"),
            None => base.to_string(),
        }
    }

    /// Localized share label; fractions and unit weights pass through
    pub fn share(&self, record: &HeirRecord) -> String {
        if record.share == RESIDUE_SHARE {
            self.labels().residue.to_string()
        } else {
            record.share.clone()
        }
    }
}
