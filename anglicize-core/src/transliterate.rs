//! # Motor de Transliteração
//!
//! Converte caracteres latinos acentuados em seus equivalentes US-ASCII,
//! preservando a caixa (maiúscula/minúscula) de cada caractere original.
//!
//! ## Algoritmo
//!
//! As regras de [`character_map`] são aplicadas **em ordem e de forma
//! cumulativa**: cada regra opera sobre o resultado da regra anterior, não
//! sobre o texto original. Assim todas as famílias de acentos são resolvidas
//! em uma única chamada.
//!
//! ```text
//! "Łódź" ─[L]→ "Lódź" ─[o]→ "Lodź" ─[z]→ "Lodz"
//! ```
//!
//! Caracteres fora da tabela (dígitos, pontuação, CJK, emoji) passam
//! inalterados. A função é total e pura.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use anglicize_core::transliterate::transliterate;
//!
//! assert_eq!(transliterate("SÃO PAULO"), "SAO PAULO");
//! assert_eq!(transliterate("Straße"), "Strasse");
//! ```

use crate::mapping::character_map;

/// Translitera `text` aplicando cumulativamente todas as regras da tabela.
pub fn transliterate(text: &str) -> String {
    // Nenhum caractere ASCII pertence a alguma regra
    if text.is_ascii() {
        return text.to_string();
    }

    character_map()
        .iter()
        .fold(text.to_string(), |result, rule| {
            if result.contains(|c: char| rule.matches(c)) {
                rule.apply(&result)
            } else {
                result
            }
        })
}
