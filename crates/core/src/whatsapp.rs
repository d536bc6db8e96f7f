//! WhatsApp hand-off: turns a brief into a pre-filled `wa.me` chat link.
//!
//! The link works for incomplete briefs too (missing fields get a
//! placeholder), since visitors may jump to WhatsApp before submitting.

use crate::brief::record::parse_budget;
use crate::brief::{NormalizedBrief, OptionCount};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

const NOT_INFORMED: &str = "Não informado";

/// Build the chat message for a brief, one statement per line.
pub fn build_message(brief: &NormalizedBrief) -> String {
    let budget = if brief.budget.is_empty() {
        NOT_INFORMED.to_string()
    } else {
        format!("R$ {}", format_brl(parse_budget(&brief.budget).unwrap_or(0.0)))
    };

    let lines = [
        "Olá, equipe Findify! Gostaria de solicitar uma curadoria personalizada.".to_string(),
        if brief.name.is_empty() {
            "Meu nome não foi informado.".to_string()
        } else {
            format!("Meu nome: {}.", brief.name)
        },
        if brief.email.is_empty() {
            "E-mail não informado.".to_string()
        } else {
            format!("Contato por e-mail: {}.", brief.email)
        },
        format!("O que desejo comprar: {}.", or_default(&brief.product, NOT_INFORMED)),
        format!("Orçamento: {budget}."),
        format!("Estilo ou uso pretendido: {}.", or_default(&brief.style, NOT_INFORMED)),
        format!("Marca preferida: {}.", or_default(&brief.brand, "Sem preferência")),
        format!(
            "Quantidade de opções desejada: {}.",
            OptionCount::parse(&brief.options).get()
        ),
        "Obrigado!".to_string(),
    ];

    lines.join("\n")
}

/// Build the `wa.me` link for `number` with the brief message pre-filled.
///
/// Non-digit characters in `number` (spaces, `+`, dashes) are dropped.
pub fn build_link(number: &str, brief: &NormalizedBrief) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{WHATSAPP_BASE_URL}/{digits}?text={}",
        urlencoding::encode(&build_message(brief))
    )
}

/// Format an amount the way Brazilian reais are written, without the
/// currency symbol: `1234.5` becomes `1.234,50`.
pub fn format_brl(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{frac_part}")
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
