//! # Relatório de Substituições
//!
//! Além do texto final, às vezes queremos saber **o que** mudou e **onde**:
//! a interface web destaca cada caractere substituído, e é útil listar as
//! palavras afetadas.
//!
//! Cada [`Substitution`] guarda a posição original em bytes (`start`, `end`),
//! no mesmo espírito dos offsets de tokens, para permitir destacar o trecho
//! no texto sem reconstruí-lo.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::mapping::lookup;
use crate::transliterate::transliterate;

/// Um caractere acentuado que foi substituído.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Substitution {
    /// Caractere original (ex: 'ã').
    pub source: char,
    /// Texto ASCII que o substituiu (ex: "a", "ss").
    pub replacement: String,
    /// Índice do caractere (em code points) no texto original.
    pub char_index: usize,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
}

/// Resultado completo de uma transliteração com as substituições aplicadas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transliteration {
    pub original: String,
    pub anglicized: String,
    pub substitutions: Vec<Substitution>,
}

impl Transliteration {
    pub fn is_unchanged(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// Quantas substituições expandiram um caractere em vários (ligaduras, eszett).
    pub fn expansion_count(&self) -> usize {
        self.substitutions
            .iter()
            .filter(|s| s.replacement.len() > 1)
            .count()
    }
}

/// Uma palavra cuja transliteração difere do original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordChange {
    pub original: String,
    pub anglicized: String,
    pub start: usize,
    pub end: usize,
}

/// Translitera `text` em uma única varredura, registrando cada substituição.
///
/// Como as regras são mutuamente exclusivas e seus substitutos são ASCII
/// (fora de qualquer regra), a varredura caractere a caractere produz o mesmo
/// texto que a aplicação cumulativa de [`transliterate`].
pub fn transliterate_with_report(text: &str) -> Transliteration {
    let mut anglicized = String::with_capacity(text.len());
    let mut substitutions = Vec::new();

    for (char_index, (start, c)) in text.char_indices().enumerate() {
        match lookup(c) {
            Some(rule) => {
                anglicized.push_str(rule.replacement);
                substitutions.push(Substitution {
                    source: c,
                    replacement: rule.replacement.to_string(),
                    char_index,
                    start,
                    end: start + c.len_utf8(),
                });
            }
            None => anglicized.push(c),
        }
    }

    Transliteration {
        original: text.to_string(),
        anglicized,
        substitutions,
    }
}

/// Lista as palavras (fronteiras Unicode UAX #29) alteradas pela transliteração.
pub fn changed_words(text: &str) -> Vec<WordChange> {
    text.unicode_word_indices()
        .filter_map(|(start, word)| {
            let anglicized = transliterate(word);
            if anglicized == word {
                return None;
            }
            Some(WordChange {
                original: word.to_string(),
                anglicized,
                start,
                end: start + word.len(),
            })
        })
        .collect()
}
