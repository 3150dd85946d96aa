//! # Textos de Demonstração
//!
//! Frases curtas em vários idiomas de escrita latina, usadas pela interface
//! web e nos testes. A primeira é a frase de referência do projeto.

/// Frase de referência exibida na inicialização do servidor.
pub const REFERENCE_TEXT: &str = "Café São Paulo – Łódź, České Švýcarsko";

/// Retorna pares (rótulo, texto) para demonstração
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Referência", REFERENCE_TEXT),
        (
            "Português",
            "A População de São Paulo e do Paraná comemorou a eleição; a Ação Civil Pública foi arquivada em Brasília.",
        ),
        (
            "Polonês",
            "Zażółć gęślą jaźń. Wrocław, Gdańsk i Łódź leżą w Polsce.",
        ),
        (
            "Tcheco",
            "Antonín Dvořák se narodil v Nelahozevsi; Příliš žluťoučký kůň úpěl ďábelské ódy.",
        ),
        (
            "Alemão",
            "Die Straße in München führt zum Großen Garten. GROẞE Überraschung für Jürgen!",
        ),
        (
            "Francês",
            "L'œuvre de Molière, un cœur à l'écoute: crème brûlée, façade, Noël, Æsope.",
        ),
        (
            "Escandinavo",
            "Ærøskøbing ligger på Ærø; Øresund og Ålesund er i Skandinavien.",
        ),
        (
            "Turco e Romeno",
            "İstanbul, Ağrı ve Şanlıurfa; Timișoara și Constanța sunt în România.",
        ),
        (
            "Sem acentos",
            "Hello, 世界! 123 — nada aqui deve mudar 🚀",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliterate::transliterate;

    #[test]
    fn test_demo_texts_become_ascii_latin() {
        for (label, text) in demo_texts() {
            let out = transliterate(text);
            if label == "Sem acentos" {
                assert_eq!(out, text);
                continue;
            }
            // Toda letra latina restante deve ser ASCII
            assert!(
                out.chars()
                    .filter(|c| c.is_alphabetic())
                    .all(|c| c.is_ascii()),
                "{label}: {out}"
            );
        }
    }

    #[test]
    fn test_reference_text_first() {
        assert_eq!(demo_texts()[0].1, REFERENCE_TEXT);
    }
}
