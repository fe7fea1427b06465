// src/noyau/postfixe.rs
//
// Évaluation d'une suite postfixe avec une pile d'opérandes.
// Pour chaque opérateur : premier pop = droite, second pop = gauche.

use num_traits::Zero;
use tracing::trace;

use super::erreur::ParseError;
use super::jetons::Tok;
use super::pile::Pile;

/// Applique un opérateur binaire. `/` par zéro est une erreur de domaine,
/// testée avant la division (pas de détection a posteriori par l'infini).
fn applique(op: Tok, gauche: f64, droite: f64) -> Result<f64, ParseError> {
    let v = match op {
        Tok::Plus => gauche + droite,
        Tok::Minus => gauche - droite,
        Tok::Star => gauche * droite,
        Tok::Slash => {
            if droite.is_zero() {
                return Err(ParseError::DivisionByZero);
            }
            gauche / droite
        }
        Tok::Caret => gauche.powf(droite),
        // pas de parenthèse dans une suite postfixe bien formée
        Tok::Num(_) | Tok::LPar | Tok::RPar => return Err(ParseError::InvalidExpression),
    };
    Ok(v)
}

pub fn evaluate_postfix(postfix: &[Tok]) -> Result<f64, ParseError> {
    let mut st: Pile<f64> = Pile::with_capacity(postfix.len());

    for &tok in postfix {
        match tok {
            Tok::Num(v) => st.push(v),
            op => {
                let droite = st.pop().map_err(|_| ParseError::InvalidExpression)?;
                let gauche = st.pop().map_err(|_| ParseError::InvalidExpression)?;
                let r = applique(op, gauche, droite)?;
                trace!(%op, gauche, droite, resultat = r, "opération");
                st.push(r);
            }
        }
    }

    if st.len() != 1 {
        trace!(restants = st.len(), capacite = st.capacite(), "pile finale invalide");
        return Err(ParseError::InvalidExpression);
    }
    Ok(*st.peek()?)
}
