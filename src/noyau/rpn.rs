// src/noyau/rpn.rs
//
// Shunting-yard : suite de Tok (infixe) -> suite de Tok (postfixe / RPN)
//
// Règles:
// - Num            : sortie directe
// - '('            : empilé
// - ')'            : dépile vers la sortie jusqu'à '(' (jetée) ; pas de '(' => erreur
// - opérateur op   : dépile tant que le sommet n'est pas '(' et que
//                    prec(sommet) > prec(op), ou prec égale et op associatif à gauche
// - fin            : vide la pile ; un '(' restant => erreur
//
// '^' est associatif à droite : à précédence égale il reste sur la pile,
// donc 2^3^2 = 2^(3^2).

use tracing::debug;

use super::erreur::{Parenthese, ParseError};
use super::jetons::{format_tokens, Tok};
use super::pile::Pile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Table statique des précédences. 0 pour ce qui n'est pas un opérateur.
pub fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

pub fn associativite(t: &Tok) -> Associativite {
    match t {
        Tok::Caret => Associativite::Droite,
        _ => Associativite::Gauche,
    }
}

/// Le sommet `top` doit-il sortir avant d'empiler `op` ?
fn doit_depiler(top: &Tok, op: &Tok) -> bool {
    let (p_top, p_op) = (precedence(top), precedence(op));
    p_top > p_op || (p_top == p_op && associativite(op) == Associativite::Gauche)
}

/// Convertit une suite de jetons infixe en postfixe.
///
/// Exemple:
///   tokens:  [Num(3), Plus, Num(4), Star, Num(2)]
///   postfix: [Num(3), Num(4), Num(2), Star, Plus]
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>, ParseError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Pile<Tok> = Pile::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                while let Some(top) = ops.try_peek() {
                    if *top == Tok::LPar {
                        break;
                    }
                    out.push(ops.pop()?);
                }

                // la pile est vide ou a '(' au sommet
                if ops.try_peek() == Some(&Tok::LPar) {
                    ops.pop()?;
                } else {
                    return Err(ParseError::MismatchedParentheses(Parenthese::Fermante));
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                while let Some(top) = ops.try_peek() {
                    if *top == Tok::LPar || !doit_depiler(top, &tok) {
                        break;
                    }
                    out.push(ops.pop()?);
                }
                ops.push(tok);
            }
        }
    }

    while !ops.is_empty() {
        let top = ops.pop()?;
        if top == Tok::LPar {
            return Err(ParseError::MismatchedParentheses(Parenthese::Ouvrante));
        }
        out.push(top);
    }

    debug!(postfixe = %format_tokens(&out), "conversion postfixe");
    Ok(out)
}
