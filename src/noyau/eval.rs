//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> postfixe (shunting-yard) -> pile d'opérandes -> texte décimal
//!
//! Aucun état partagé : chaque appel construit et jette ses propres piles.

use tracing::{debug, warn};

use super::erreur::ParseError;
use super::jetons::{format_tokens, tokenize};
use super::postfixe::evaluate_postfix;
use super::rpn::to_postfix;

/// Étapes intermédiaires d'une évaluation réussie (panneau "Démarche").
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Detail {
    pub jetons: String,
    pub postfixe: String,
    pub resultat: String,
}

/// API publique : évalue une expression et retourne le résultat en texte.
///
/// Le séparateur décimal est toujours `.` (formatage `f64` de Rust,
/// indépendant de la locale).
///
/// Seule la division par zéro est refusée : un dépassement (ex: `10 ^ 400`)
/// n'est pas une erreur et s'affiche `inf` / `-inf`, un résultat indéfini
/// `NaN`. Tout résultat infini n'est donc PAS rejeté.
pub fn evaluate(expression: &str) -> Result<String, ParseError> {
    evaluate_detaille(expression).map(|d| d.resultat)
}

/// Comme `evaluate`, avec jetons et postfixe en texte.
///
/// Le texte n'est PAS rogné : la position 0 compte pour le moins unaire.
pub fn evaluate_detaille(expression: &str) -> Result<Detail, ParseError> {
    let resultat = pipeline(expression);
    match &resultat {
        Err(e @ ParseError::EmptyStack(_)) => warn!(%e, expression, "invariant de pile violé"),
        Err(e) => debug!(%e, expression, "évaluation refusée"),
        Ok(d) => debug!(resultat = %d.resultat, expression, "évaluation"),
    }
    resultat
}

fn pipeline(expression: &str) -> Result<Detail, ParseError> {
    // 1) Jetons
    let jetons = tokenize(expression)?;
    let jetons_txt = format_tokens(&jetons);
    debug!(jetons = %jetons_txt, "tokenisation");

    // 2) Postfixe
    let postfixe = to_postfix(&jetons)?;

    // 3) Valeur
    let valeur = evaluate_postfix(&postfixe)?;

    Ok(Detail {
        jetons: jetons_txt,
        postfixe: format_tokens(&postfixe),
        resultat: valeur.to_string(),
    })
}
