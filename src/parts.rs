use serde::Serialize;

/// The five major divisions of the Summa. Static reference data: the
/// question counts bound batch enumeration and are never derived from
/// document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartId {
    Prima,
    PrimaSecundae,
    SecundaSecundae,
    Tertia,
    Supplementum,
}

#[derive(Debug, Clone, Copy)]
pub struct Part {
    pub id: PartId,
    pub code: &'static str,
    pub name: &'static str,
    pub latin_name: &'static str,
    pub questions: u32,
}

pub const PARTS: [Part; 5] = [
    Part {
        id: PartId::Prima,
        code: "FP",
        name: "First Part",
        latin_name: "Prima Pars",
        questions: 119,
    },
    Part {
        id: PartId::PrimaSecundae,
        code: "FS",
        name: "First Part of the Second Part",
        latin_name: "Prima Secundae",
        questions: 114,
    },
    Part {
        id: PartId::SecundaSecundae,
        code: "SS",
        name: "Second Part of the Second Part",
        latin_name: "Secunda Secundae",
        questions: 189,
    },
    Part {
        id: PartId::Tertia,
        code: "TP",
        name: "Third Part",
        latin_name: "Tertia Pars",
        questions: 90,
    },
    Part {
        id: PartId::Supplementum,
        code: "XP",
        name: "Supplement",
        latin_name: "Supplementum",
        questions: 99,
    },
];

impl PartId {
    pub fn part(self) -> &'static Part {
        // PARTS is declared in variant order.
        &PARTS[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.part().code
    }

    /// Case-insensitive lookup by part code ("fp", "FP", ...).
    pub fn from_code(code: &str) -> Option<PartId> {
        PARTS
            .iter()
            .find(|p| p.code.eq_ignore_ascii_case(code.trim()))
            .map(|p| p.id)
    }
}
