//! # anglicize-core — Transliteração de Caracteres Acentuados para US-ASCII
//!
//! Este crate converte caracteres latinos acentuados em seus equivalentes
//! US-ASCII mais próximos, preservando a caixa de cada caractere original
//! ("SÃO PAULO" → "SAO PAULO", "Łódź" → "Lodz").
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui em uma única direção:
//!
//! 1.  **Tabela** ([`mapping`]): sequência ordenada e imutável de regras
//!     (conjunto de caracteres de origem → substituto ASCII).
//! 2.  **Motor** ([`transliterate`](mod@transliterate)): aplica as regras em ordem, cada uma
//!     sobre o resultado da anterior.
//! 3.  **Relatórios** ([`report`]): posições de cada substituição e palavras alteradas.
//! 4.  **Lote** ([`batch`]): muitos textos em paralelo.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use anglicize_core::{transliterate, transliterate_with_report};
//!
//! assert_eq!(transliterate("café"), "cafe");
//! assert_eq!(transliterate("Hello, 世界! 123"), "Hello, 世界! 123");
//!
//! let report = transliterate_with_report("Straße");
//! assert_eq!(report.anglicized, "Strasse");
//! assert_eq!(report.expansion_count(), 1);
//! ```
//!
//! Decodificar bytes em texto é responsabilidade de quem chama: todas as
//! funções recebem `&str`, que já é UTF-8 válido.

pub mod batch;
pub mod mapping;
pub mod report;
pub mod samples;
pub mod transliterate;

pub use batch::transliterate_batch;
pub use mapping::{character_map, lookup, MappingRule};
pub use report::{
    changed_words, transliterate_with_report, Substitution, Transliteration, WordChange,
};
pub use transliterate::transliterate;
