use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ProtocolError;

/// What selecting one clinical finding contributes to an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingRule {
    pub weight: u32,
    /// Recommended exams, in protocol order. Strings are kept literally;
    /// near-duplicates across rules are not merged.
    pub exams: Vec<String>,
    pub justification: String,
    pub bibliography_source: String,
    pub reference_link: String,
}

/// A named rule, the unit a catalog is built from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogEntry {
    pub finding: String,
    #[serde(flatten)]
    pub rule: FindingRule,
}

/// Read-only mapping from finding name to [`FindingRule`].
///
/// Backed by a `BTreeMap`, so iteration is in lexicographic order of the
/// finding names.
#[derive(Debug, Clone, Default)]
pub struct ProtocolCatalog {
    rules: BTreeMap<String, FindingRule>,
}

impl ProtocolCatalog {
    /// Build a catalog, rejecting a finding name that appears twice and a
    /// source with no rules at all.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, ProtocolError> {
        let mut rules = BTreeMap::new();
        for entry in entries {
            if rules.contains_key(&entry.finding) {
                return Err(ProtocolError::DuplicateFinding(entry.finding));
            }
            rules.insert(entry.finding, entry.rule);
        }
        let catalog = Self { rules };
        if catalog.is_empty() {
            return Err(ProtocolError::EmptyCatalog);
        }
        Ok(catalog)
    }

    /// Build a catalog from a JSON array of [`CatalogEntry`].
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// The rule for `finding`, if the catalog knows it.
    pub fn lookup(&self, finding: &str) -> Option<&FindingRule> {
        self.rules.get(finding)
    }

    /// Every finding name, sorted.
    pub fn all_finding_names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FindingRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The built-in ophthalmology protocol catalog.
pub fn catalog() -> &'static ProtocolCatalog {
    static CATALOG: LazyLock<ProtocolCatalog> = LazyLock::new(|| ProtocolCatalog {
        rules: PROTOCOLS
            .iter()
            .map(|row| (row.finding.to_string(), row.to_rule()))
            .collect(),
    });
    &CATALOG
}

struct Row {
    finding: &'static str,
    weight: u32,
    exams: &'static [&'static str],
    justification: &'static str,
    source: &'static str,
    link: &'static str,
}

impl Row {
    fn to_rule(&self) -> FindingRule {
        FindingRule {
            weight: self.weight,
            exams: self.exams.iter().map(|e| e.to_string()).collect(),
            justification: self.justification.to_string(),
            bibliography_source: self.source.to_string(),
            reference_link: self.link.to_string(),
        }
    }
}

const AAO_POAG_PPP: &str =
    "https://www.aao.org/education/preferred-practice-pattern/primary-open-angle-glaucoma-ppp";
const CBO_DIRETRIZES: &str = "https://www.cbo.com.br/novo/medico/pdf/Diretrizes_CBO_AMB_CFM.pdf";

// "Mapeamento de Retina" appears both with and without the "– AO" suffix.
// Both spellings are kept as distinct exams.
const PROTOCOLS: &[Row] = &[
    Row {
        finding: "Miopia > -1.00",
        weight: 3,
        exams: &["Mapeamento de Retina – AO", "Retinografia Simples – AO"],
        justification: "Rastreio de fragilidade periférica e degenerações latentes.",
        source: "AAO PPP Comprehensive Evaluation",
        link: "https://www.aao.org/education/preferred-practice-pattern/comprehensive-adult-medical-eye-evaluation-ppp",
    },
    Row {
        finding: "Lesão em retina",
        weight: 5,
        exams: &["Mapeamento de Retina – AO", "OCT de Mácula – AO"],
        justification: "Monitoramento de integridade retiniana e camadas neurais.",
        source: "CBO Diretrizes Retina",
        link: CBO_DIRETRIZES,
    },
    Row {
        finding: "Astigmatismo > -1.50",
        weight: 2,
        exams: &["Ceratoscopia / Topografia – AO", "Paquimetria de Córnea – AO"],
        justification: "Avaliação de curvatura e espessura para descarte de ectasias.",
        source: "Global Consensus on Keratoconus",
        link: "https://pubmed.ncbi.nlm.nih.gov/25901970/",
    },
    Row {
        finding: "Suspeita de ceratocone",
        weight: 4,
        exams: &["Ceratoscopia / Topografia – AO", "Paquimetria de Córnea – AO"],
        justification: "Investigação estrutural corneana baseada em padrões de curvatura.",
        source: "AAO Corneal PPP",
        link: "https://www.aao.org/education/preferred-practice-pattern/corneal-ectasia-ppp",
    },
    Row {
        finding: "Hipermetropia > +2.50",
        weight: 2,
        exams: &["Gonioscopia – AO"],
        justification: "Rastreio preventivo de ângulo estreito em hipermétropes.",
        source: "AAO POAG PPP",
        link: AAO_POAG_PPP,
    },
    Row {
        finding: "Câmara anterior rasa",
        weight: 4,
        exams: &["Gonioscopia – AO"],
        justification: "Risco elevado de fechamento angular primário.",
        source: "CBO Consenso Glaucoma",
        link: CBO_DIRETRIZES,
    },
    Row {
        finding: "PIO > 19mmHg",
        weight: 5,
        exams: &["Paquimetria – AO", "Campimetria – AO", "OCT de Nervo Óptico – AO"],
        justification: "Investigação de HT Ocular e risco OHTS.",
        source: "OHTS Study / AAO POAG",
        link: AAO_POAG_PPP,
    },
    Row {
        finding: "Escavação > 0.5",
        weight: 4,
        exams: &["OCT de Nervo Óptico – AO", "Campimetria – AO"],
        justification: "Avaliação estrutural e funcional do nervo óptico.",
        source: "AAO POAG PPP",
        link: AAO_POAG_PPP,
    },
    Row {
        finding: "Suspeita de glaucoma",
        weight: 4,
        exams: &["OCT de Nervo Óptico – AO", "Paquimetria – AO", "Campimetria – AO"],
        justification: "Rastreio multimodal para detecção precoce.",
        source: "CBO / ICO Guidelines",
        link: CBO_DIRETRIZES,
    },
    Row {
        finding: "Glaucoma confirmado",
        weight: 5,
        exams: &[
            "Curva Tensional Diária ou TSH – AO",
            "Campimetria – AO",
            "Gonioscopia – AO",
        ],
        justification: "Monitoramento de progressão e estabilidade tensional.",
        source: "SOE Guidelines",
        link: "https://www.soe.org/guidelines/",
    },
    Row {
        finding: "Diabetes",
        weight: 5,
        exams: &["OCT de Mácula – AO", "Retinografia Colorida – AO"],
        justification: "Rastreio de retinopatia diabética (ETDRS).",
        source: "AAO Diabetic Retinopathy",
        link: "https://www.aao.org/education/preferred-practice-pattern/diabetic-retinopathy-ppp",
    },
    Row {
        finding: "Hipertensão",
        weight: 3,
        exams: &["Mapeamento de Retina – AO", "Retinografia Colorida – AO"],
        justification: "Avaliação de alterações microvasculares sistêmicas.",
        source: "Diretrizes SBC/CBO",
        link: CBO_DIRETRIZES,
    },
    Row {
        finding: "Cirurgia ocular >1 ano",
        weight: 2,
        exams: &["Microscopia Especular – AO", "Mapeamento de Retina"],
        justification: "Monitoramento endotelial e integridade pós-cirúrgica.",
        source: "AAO Corneal Endothelial",
        link: "https://www.aao.org/education/preferred-practice-pattern/corneal-endothelial-ppp",
    },
    Row {
        finding: "Trauma ocular",
        weight: 4,
        exams: &["USG Ocular – AO", "Gonioscopia – AO", "Mapeamento de Retina"],
        justification: "Avaliação de danos estruturais e risco de recessão angular.",
        source: "Ocular Trauma Score",
        link: "https://pubmed.ncbi.nlm.nih.gov/12028607/",
    },
    Row {
        finding: "Suspeita de uveíte",
        weight: 4,
        exams: &["OCT de Mácula – AO", "USG Ocular – AO"],
        justification: "Pesquisa de focos inflamatórios e complicações maculares.",
        source: "IUSG Guidelines",
        link: "https://www.iusg.net/",
    },
    Row {
        finding: "Olho seco",
        weight: 2,
        exams: &["Teste de Shirmmer – AO", "Ceratoscopia – AO"],
        justification: "Avaliação de superfície ocular e filme lacrimal.",
        source: "TFOS DEWS II",
        link: "https://www.tfosdewsneureport.org/",
    },
];
