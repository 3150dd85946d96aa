//! # Transliteração em Lote
//!
//! A tabela de mapeamento é imutável e cada chamada de [`transliterate`] é
//! independente, então um lote de textos pode ser processado em paralelo via
//! Rayon sem nenhuma sincronização.

use rayon::prelude::*;

use crate::transliterate::transliterate;

/// Translitera cada texto do lote em paralelo, preservando a ordem de entrada.
pub fn transliterate_batch<S>(texts: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| transliterate(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let texts = vec!["café", "SÃO PAULO", "", "Straße", "Łódź"];
        let out = transliterate_batch(&texts);
        assert_eq!(out, vec!["cafe", "SAO PAULO", "", "Strasse", "Lodz"]);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let texts: Vec<String> = (0..500)
            .map(|i| format!("linha {i}: Ærø Øster Ñandú Ğiresun"))
            .collect();
        let parallel = transliterate_batch(&texts);
        let sequential: Vec<String> = texts.iter().map(|t| transliterate(t)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_batch_empty() {
        let texts: Vec<&str> = vec![];
        assert!(transliterate_batch(&texts).is_empty());
    }
}
