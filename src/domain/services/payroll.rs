/// Social contribution rate applied to gross salary.
const TAUX_COTISATIONS: f64 = 0.315;

pub fn cotisations(salaire_brut: i64) -> i64 {
    (salaire_brut as f64 * TAUX_COTISATIONS).round() as i64
}

pub fn salaire_net(salaire_brut: i64) -> i64 {
    salaire_brut - cotisations(salaire_brut)
}
