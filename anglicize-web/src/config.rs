//! Configuração do servidor lida de variáveis de ambiente.
//!
//! - `ANGLICIZE_ADDR`: endereço de escuta (padrão `0.0.0.0:3000`)
//! - `ANGLICIZE_MAX_TEXT_BYTES`: tamanho máximo de cada texto recebido (padrão 64 KiB)
//! - `ANGLICIZE_MAX_BATCH_TEXTS`: quantidade máxima de textos por lote (padrão 1000)
//!
//! Valores inválidos são registrados com `warn!` e substituídos pelo padrão.

use tracing::warn;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_TEXT_BYTES: usize = 64 * 1024;
pub const DEFAULT_MAX_BATCH_TEXTS: usize = 1000;

/// Pior caso no JSON: cada byte do texto escrito como `\uXXXX`.
const JSON_ESCAPE_FACTOR: usize = 6;
/// Aspas, chaves e nome do campo em torno de cada texto.
const JSON_OVERHEAD: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: String,
    pub max_text_bytes: usize,
    pub max_batch_texts: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
            max_batch_texts: DEFAULT_MAX_BATCH_TEXTS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = get("ANGLICIZE_ADDR").filter(|a| !a.trim().is_empty()) {
            config.addr = addr.trim().to_string();
        }

        config.max_text_bytes =
            parse_positive(&get, "ANGLICIZE_MAX_TEXT_BYTES", DEFAULT_MAX_TEXT_BYTES);
        config.max_batch_texts =
            parse_positive(&get, "ANGLICIZE_MAX_BATCH_TEXTS", DEFAULT_MAX_BATCH_TEXTS);

        config
    }

    /// Limite do corpo HTTP de `/transliterate`: um texto do tamanho máximo
    /// precisa chegar ao handler para ser validado por ele.
    pub fn text_body_limit(&self) -> usize {
        self.max_text_bytes
            .saturating_mul(JSON_ESCAPE_FACTOR)
            .saturating_add(JSON_OVERHEAD)
    }

    /// Limite do corpo HTTP de `/transliterate/batch`.
    pub fn batch_body_limit(&self) -> usize {
        self.text_body_limit().saturating_mul(self.max_batch_texts)
    }
}

fn parse_positive(get: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    let Some(raw) = get(key) else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            warn!("{} inválido ({:?}), usando {}", key, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ANGLICIZE_ADDR", "127.0.0.1:8080"),
            ("ANGLICIZE_MAX_TEXT_BYTES", "1024"),
            ("ANGLICIZE_MAX_BATCH_TEXTS", "10"),
        ]));
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.max_text_bytes, 1024);
        assert_eq!(config.max_batch_texts, 10);
    }

    #[test]
    fn test_invalid_limit_falls_back() {
        for raw in ["abc", "0", "-5"] {
            let config = ServerConfig::from_lookup(lookup_from(&[
                ("ANGLICIZE_MAX_TEXT_BYTES", raw),
                ("ANGLICIZE_MAX_BATCH_TEXTS", raw),
            ]));
            assert_eq!(config.max_text_bytes, DEFAULT_MAX_TEXT_BYTES);
            assert_eq!(config.max_batch_texts, DEFAULT_MAX_BATCH_TEXTS);
        }
    }

    #[test]
    fn test_body_limits_cover_max_text() {
        let config = ServerConfig {
            max_text_bytes: 8 * 1024 * 1024,
            max_batch_texts: 4,
            ..ServerConfig::default()
        };
        // Texto no limite, totalmente escapado, ainda cabe no corpo
        assert!(config.text_body_limit() >= 6 * config.max_text_bytes);
        assert_eq!(config.batch_body_limit(), 4 * config.text_body_limit());

        let huge = ServerConfig {
            max_text_bytes: usize::MAX,
            ..ServerConfig::default()
        };
        assert_eq!(huge.batch_body_limit(), usize::MAX);
    }
}
