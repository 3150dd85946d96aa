//! # Tabela de Mapeamento de Caracteres Acentuados
//!
//! Define a tabela canônica que associa cada família de caracteres acentuados
//! à sua letra base em US-ASCII. A tabela é uma sequência **ordenada** de
//! [`MappingRule`]s, construída em tempo de compilação (`static`) e nunca
//! alterada, portanto pode ser lida por qualquer número de threads sem locks.
//!
//! ## Famílias Cobertas
//!
//! - **Letra única**: a/e/i/o/u/c/d/g/l/n/r/s/t/y/z com circunflexo, grave,
//!   agudo, trema, til, breve, ogonek, háček e traço. Cada regra mapeia a
//!   família inteira para a letra base **na mesma caixa** (ex: "Ã" → "A").
//! - **Ligaduras**: "æ" → "ae", "Æ" → "AE", "œ" → "oe", "Œ" → "OE".
//! - **Eszett alemão**: "ß" → "ss", "ẞ" → "SS".
//!
//! Nenhum caractere aparece em mais de uma regra: os domínios são mutuamente
//! exclusivos, então a ordem da tabela não altera o resultado.

use serde::Serialize;

/// Uma regra de substituição: um conjunto de caracteres de origem e o texto
/// ASCII que substitui qualquer um deles.
///
/// Equivale a uma classe de caracteres de regex (`[àáâ]`), mas testada
/// diretamente por pertinência, sem motor de expressões regulares.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MappingRule {
    /// Caracteres de origem (mesma letra base, mesma caixa).
    pub sources: &'static [char],
    /// Substituto ASCII imprimível (1 ou 2 caracteres).
    pub replacement: &'static str,
}

impl MappingRule {
    const fn new(sources: &'static [char], replacement: &'static str) -> Self {
        Self { sources, replacement }
    }

    /// Indica se `c` pertence ao conjunto de origem desta regra.
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        self.sources.contains(&c)
    }

    /// Regras de ligadura e eszett expandem um caractere em dois.
    pub fn is_expansion(&self) -> bool {
        self.replacement.len() > 1
    }

    /// Substitui, da esquerda para a direita e em uma única passada, todo
    /// caractere de `text` que pertence a esta regra.
    pub fn apply(&self, text: &str) -> String {
        text.replace(|c: char| self.matches(c), self.replacement)
    }
}

/// A tabela completa, na ordem de aplicação.
static CHARACTER_MAP: &[MappingRule] = &[
    MappingRule::new(&['à', 'á', 'â', 'ä', 'ã', 'å', 'ā', 'ă', 'ą'], "a"),
    MappingRule::new(&['À', 'Á', 'Â', 'Ä', 'Ã', 'Å', 'Ā', 'Ă', 'Ą'], "A"),
    MappingRule::new(&['æ'], "ae"),
    MappingRule::new(&['Æ'], "AE"),
    MappingRule::new(&['ç', 'ć', 'č', 'ĉ', 'ċ'], "c"),
    MappingRule::new(&['Ç', 'Ć', 'Č', 'Ĉ', 'Ċ'], "C"),
    MappingRule::new(&['đ', 'ď'], "d"),
    MappingRule::new(&['Đ', 'Ď'], "D"),
    MappingRule::new(&['ğ', 'ģ', 'ĝ', 'ġ'], "g"),
    MappingRule::new(&['Ğ', 'Ģ', 'Ĝ', 'Ġ'], "G"),
    MappingRule::new(&['è', 'é', 'ê', 'ë', 'ē', 'ė', 'ę', 'ě', 'ĕ'], "e"),
    MappingRule::new(&['È', 'É', 'Ê', 'Ë', 'Ē', 'Ė', 'Ę', 'Ě', 'Ĕ'], "E"),
    MappingRule::new(&['ì', 'í', 'î', 'ï', 'ī', 'į', 'ĩ', 'ĭ', 'ı'], "i"),
    MappingRule::new(&['Ì', 'Í', 'Î', 'Ï', 'Ī', 'Į', 'Ĩ', 'Ĭ', 'İ'], "I"),
    MappingRule::new(&['ł', 'ľ', 'ĺ', 'ļ'], "l"),
    MappingRule::new(&['Ł', 'Ľ', 'Ĺ', 'Ļ'], "L"),
    MappingRule::new(&['ñ', 'ń', 'ň', 'ņ'], "n"),
    MappingRule::new(&['Ñ', 'Ń', 'Ň', 'Ņ'], "N"),
    MappingRule::new(&['ò', 'ó', 'ô', 'ö', 'õ', 'ø', 'ō', 'ő', 'ŏ'], "o"),
    MappingRule::new(&['Ò', 'Ó', 'Ô', 'Ö', 'Õ', 'Ø', 'Ō', 'Ő', 'Ŏ'], "O"),
    MappingRule::new(&['œ'], "oe"),
    MappingRule::new(&['Œ'], "OE"),
    MappingRule::new(&['ù', 'ú', 'û', 'ü', 'ū', 'ų', 'ũ', 'ů', 'ű', 'ŭ'], "u"),
    MappingRule::new(&['Ù', 'Ú', 'Û', 'Ü', 'Ū', 'Ų', 'Ũ', 'Ů', 'Ű', 'Ŭ'], "U"),
    MappingRule::new(&['ř', 'ŗ', 'ŕ'], "r"),
    MappingRule::new(&['Ř', 'Ŗ', 'Ŕ'], "R"),
    MappingRule::new(&['ś', 'š', 'ş', 'ș', 'ŝ'], "s"),
    MappingRule::new(&['Ś', 'Š', 'Ş', 'Ș', 'Ŝ'], "S"),
    MappingRule::new(&['ß'], "ss"),
    MappingRule::new(&['ẞ'], "SS"),
    MappingRule::new(&['ť', 'ţ', 'ț'], "t"),
    MappingRule::new(&['Ť', 'Ţ', 'Ț'], "T"),
    MappingRule::new(&['ý', 'ÿ', 'ŷ'], "y"),
    MappingRule::new(&['Ý', 'Ÿ', 'Ŷ'], "Y"),
    MappingRule::new(&['ź', 'ž', 'ż'], "z"),
    MappingRule::new(&['Ź', 'Ž', 'Ż'], "Z"),
];

/// Retorna a tabela de mapeamento ordenada.
pub fn character_map() -> &'static [MappingRule] {
    CHARACTER_MAP
}

/// Encontra a regra cujo conjunto de origem contém `c`.
///
/// Caracteres ASCII nunca pertencem a nenhuma regra, então retornam `None`
/// sem percorrer a tabela.
pub fn lookup(c: char) -> Option<&'static MappingRule> {
    if c.is_ascii() {
        return None;
    }
    CHARACTER_MAP.iter().find(|rule| rule.matches(c))
}
