// src/noyau/jetons.rs

use std::fmt;

use num_traits::Zero;

use super::erreur::ParseError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    // NOTE: jamais produit par tokenize (le moins devient Plus + nombre négatif).
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Plus => write!(f, "+"),
            Tok::Minus => write!(f, "-"),
            Tok::Star => write!(f, "*"),
            Tok::Slash => write!(f, "/"),
            Tok::Caret => write!(f, "^"),
            Tok::LPar => write!(f, "("),
            Tok::RPar => write!(f, ")"),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers et décimaux (ex: 12, 3.25), point `.` comme séparateur
/// - opérateurs + * / ^ et parenthèses ( )
/// - `-` : réécrit en `+` suivi d'un nombre négatif (a - b => a + (-b)).
///   En tout premier caractère du texte (index 0, blancs NON sautés),
///   on injecte en plus `0 +` devant : -b => 0 + (-b).
///
/// Le texte n'est pas rogné avant l'analyse : " -5" n'a donc pas de 0
/// injecté et donne un postfixe mal formé (comportement conservé).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ParseError> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();

    // vaut pour le PROCHAIN littéral numérique
    let mut negation_en_attente = false;

    let mut i = saute_blancs(&chars, 0);
    if i == chars.len() {
        return Err(ParseError::EmptyExpression);
    }

    while i < chars.len() {
        let c = chars[i];

        match c {
            '-' => {
                negation_en_attente = true;
                if i == 0 {
                    out.push(Tok::Num(f64::zero()));
                }
                out.push(Tok::Plus);
                i += 1;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
            }
            '(' => {
                out.push(Tok::LPar);
                i += 1;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
            }
            _ if c.is_ascii_digit() => {
                let (valeur, suivant) = lit_nombre(&chars, i, negation_en_attente)?;
                negation_en_attente = false;
                out.push(Tok::Num(valeur));
                i = suivant;
            }
            _ => return Err(ParseError::UnexpectedToken(c)),
        }

        i = saute_blancs(&chars, i);
    }

    Ok(out)
}

/// Position du premier caractère non blanc à partir de `i`.
fn saute_blancs(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

/// Lit un littéral (chiffres et `.`, glouton) à partir de `debut`.
/// Retourne la valeur et la position qui suit le littéral.
fn lit_nombre(chars: &[char], debut: usize, negatif: bool) -> Result<(f64, usize), ParseError> {
    let mut i = debut;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }

    let mut texte = String::with_capacity(i - debut + 1);
    if negatif {
        texte.push('-');
    }
    texte.extend(&chars[debut..i]);

    if texte.ends_with('.') {
        return Err(ParseError::InvalidNumberLiteral(texte));
    }

    // "1.2.3" : plusieurs points => conversion impossible
    let valeur = texte
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumberLiteral(texte.clone()))?;

    Ok((valeur, i))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
