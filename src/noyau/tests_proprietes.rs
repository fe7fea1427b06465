//! Tests de propriétés : précédence, idempotence, pile LIFO.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - référence : descente récursive indépendante (précédence standard, ^ à droite)
//!
//! Le générateur ne met après un `-` binaire qu'un littéral non suivi de `^` :
//! ailleurs, la réécriture a - b => a + (-b) du tokenizer ne coïncide pas avec
//! la soustraction usuelle (voir tests_regressions.rs).

use std::time::{Duration, Instant};

use super::erreur::ParseError;
use super::eval::evaluate;
use super::pile::Pile;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_litteral(rng: &mut Rng, out: &mut String) {
    let s = match rng.pick(12) {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "7",
        6 => "10",
        7 => "0.5",
        8 => "1.25",
        9 => "2.75",
        10 => "12",
        _ => "100",
    };
    out.push_str(s);
}

fn gen_atome(rng: &mut Rng, prof: u32, out: &mut String) {
    if prof > 0 && rng.pick(4) == 0 {
        out.push('(');
        gen_expr(rng, prof - 1, out);
        out.push(')');
    } else {
        gen_litteral(rng, out);
    }
}

/// facteur := atome [ ^ facteur ]
fn gen_facteur(rng: &mut Rng, prof: u32, out: &mut String) {
    gen_atome(rng, prof, out);
    if rng.pick(5) == 0 {
        out.push_str(" ^ ");
        gen_facteur(rng, prof.saturating_sub(1), out);
    }
}

fn gen_suite_produit(rng: &mut Rng, prof: u32, out: &mut String) {
    for _ in 0..rng.pick(3) {
        out.push_str(if rng.coin() { " * " } else { " / " });
        gen_facteur(rng, prof, out);
    }
}

/// terme := facteur { (*|/) facteur }
fn gen_terme(rng: &mut Rng, prof: u32, out: &mut String) {
    gen_facteur(rng, prof, out);
    gen_suite_produit(rng, prof, out);
}

/// expr := terme { + terme | - litteral { (*|/) facteur } }
fn gen_expr(rng: &mut Rng, prof: u32, out: &mut String) {
    gen_terme(rng, prof, out);
    for _ in 0..rng.pick(4) {
        if rng.coin() {
            out.push_str(" + ");
            gen_terme(rng, prof, out);
        } else {
            out.push_str(" - ");
            gen_litteral(rng, out);
            gen_suite_produit(rng, prof, out);
        }
    }
}

/* ------------------------ Référence (descente récursive) ------------------------ */

struct Reference<'a> {
    s: &'a [u8],
    i: usize,
}

impl<'a> Reference<'a> {
    fn eval(s: &'a str) -> Result<f64, ParseError> {
        let mut r = Reference { s: s.as_bytes(), i: 0 };
        let v = r.expr()?;
        r.blancs();
        assert_eq!(r.i, r.s.len(), "référence: reste non lu dans {s:?}");
        Ok(v)
    }

    fn blancs(&mut self) {
        while self.i < self.s.len() && self.s[self.i] == b' ' {
            self.i += 1;
        }
    }

    fn voit(&mut self, c: u8) -> bool {
        self.blancs();
        if self.i < self.s.len() && self.s[self.i] == c {
            self.i += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Result<f64, ParseError> {
        let mut v = self.terme()?;
        loop {
            if self.voit(b'+') {
                v += self.terme()?;
            } else if self.voit(b'-') {
                v -= self.terme()?;
            } else {
                return Ok(v);
            }
        }
    }

    fn terme(&mut self) -> Result<f64, ParseError> {
        let mut v = self.facteur()?;
        loop {
            if self.voit(b'*') {
                v *= self.facteur()?;
            } else if self.voit(b'/') {
                let d = self.facteur()?;
                if d == 0.0 {
                    return Err(ParseError::DivisionByZero);
                }
                v /= d;
            } else {
                return Ok(v);
            }
        }
    }

    fn facteur(&mut self) -> Result<f64, ParseError> {
        let base = self.atome()?;
        if self.voit(b'^') {
            let exposant = self.facteur()?;
            return Ok(base.powf(exposant));
        }
        Ok(base)
    }

    fn atome(&mut self) -> Result<f64, ParseError> {
        if self.voit(b'(') {
            let v = self.expr()?;
            assert!(self.voit(b')'), "référence: ')' attendue");
            return Ok(v);
        }
        self.blancs();
        let debut = self.i;
        while self.i < self.s.len() && (self.s[self.i].is_ascii_digit() || self.s[self.i] == b'.')
        {
            self.i += 1;
        }
        let txt = std::str::from_utf8(&self.s[debut..self.i]).expect("ascii");
        Ok(txt.parse::<f64>().expect("littéral généré valide"))
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn prop_precedence_standard() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..3000 {
        budget(start, max);

        let mut s = String::new();
        gen_expr(&mut rng, 3, &mut s);

        let attendu = Reference::eval(&s).map(|v| v.to_string());
        let obtenu = evaluate(&s);
        assert_eq!(obtenu, attendu, "expr={s:?}");
    }
}

#[test]
fn prop_exemples_manuels_contre_reference() {
    for s in [
        "3 + 4 * 2",
        "(3 + 4) * 2",
        "2 ^ 3 ^ 2",
        "(2 ^ 3) ^ 2",
        "100 / 10 / 5",
        "1 - 2 * 3",
        "10 - 4 - 3",
        "2 * (3 + 4) ^ 2 / 7",
        "0.5 ^ 2 + 1.25",
    ] {
        let attendu = Reference::eval(s).map(|v| v.to_string());
        assert_eq!(evaluate(s), attendu, "expr={s:?}");
    }
}

#[test]
fn prop_idempotence() {
    let mut rng = Rng::new(7);
    for _ in 0..300 {
        let mut s = String::new();
        gen_expr(&mut rng, 2, &mut s);
        let a = evaluate(&s);
        let b = evaluate(&s);
        let c = evaluate(&s);
        assert_eq!(a, b, "expr={s:?}");
        assert_eq!(b, c, "expr={s:?}");
    }
}

#[test]
fn prop_pile_lifo() {
    let mut rng = Rng::new(42);
    for _ in 0..200 {
        let n = rng.pick(300) as usize;
        let valeurs: Vec<u32> = (0..n).map(|_| rng.next_u32()).collect();

        let mut p = Pile::new();
        for &v in &valeurs {
            p.push(v);
            assert!(p.capacite() >= p.len());
        }
        for &v in valeurs.iter().rev() {
            assert_eq!(p.pop(), Ok(v));
        }
        assert_eq!(p.try_peek(), None);
    }
}
