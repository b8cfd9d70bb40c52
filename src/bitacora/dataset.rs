//! The static reference catalog used for title suggestions.
//!
//! Read-only; the journal never touches it. Ordering matters: suggestion
//! matching returns hits in catalog order, not re-sorted.

use crate::model::CategoryKind;

/// Upper bound on suggestions returned for one query.
pub const MAX_SUGGESTIONS: usize = 5;

/// One known work in the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Work {
    pub title: &'static str,
    pub year: u16,
    pub category: CategoryKind,
}

const fn film(title: &'static str, year: u16) -> Work {
    Work {
        title,
        year,
        category: CategoryKind::Film,
    }
}

const fn series(title: &'static str, year: u16) -> Work {
    Work {
        title,
        year,
        category: CategoryKind::Series,
    }
}

const fn concert(title: &'static str, year: u16) -> Work {
    Work {
        title,
        year,
        category: CategoryKind::Concert,
    }
}

pub const FAMOUS_WORKS: &[Work] = &[
    film("Volver al Futuro", 1985),
    film("El Padrino", 1972),
    film("Matrix", 1999),
    film("Pulp Fiction", 1994),
    film("El Secreto de Sus Ojos", 2009),
    film("Nueve Reinas", 2000),
    film("Relatos Salvajes", 2014),
    film("Esperando la Carroza", 1985),
    film("El Hijo de la Novia", 2001),
    film("Blade Runner", 1982),
    film("2001: Odisea del Espacio", 1968),
    film("El Laberinto del Fauno", 2006),
    film("La La Land", 2016),
    film("Parasite", 2019),
    film("Interestelar", 2014),
    film("El Club de la Pelea", 1999),
    film("Kill Bill", 2003),
    film("Amélie", 2001),
    film("Ciudad de Dios", 2002),
    film("El Gran Hotel Budapest", 2014),
    series("Breaking Bad", 2008),
    series("Los Soprano", 1999),
    series("Okupas", 2000),
    series("Los Simuladores", 2002),
    series("El Encargado", 2022),
    series("Game of Thrones", 2011),
    series("The Wire", 2002),
    series("Chernobyl", 2019),
    series("True Detective", 2014),
    series("Better Call Saul", 2015),
    series("Black Mirror", 2011),
    series("The Office", 2005),
    series("Seinfeld", 1989),
    series("Twin Peaks", 1990),
    series("Severance", 2022),
    concert("Soda Stereo", 1982),
    concert("Charly García", 1972),
    concert("Luis Alberto Spinetta", 1967),
    concert("Patricio Rey y sus Redonditos de Ricota", 1976),
    concert("Gustavo Cerati", 1999),
    concert("Divididos", 1988),
    concert("La Renga", 1988),
    concert("Babasónicos", 1991),
    concert("Fito Páez", 1984),
    concert("Andrés Calamaro", 1978),
    concert("Los Fabulosos Cadillacs", 1985),
    concert("Las Pelotas", 1988),
    concert("Metallica", 1981),
    concert("Radiohead", 1985),
    concert("Paul McCartney", 1970),
];

/// The first [`MAX_SUGGESTIONS`] works whose title contains `query` as a
/// case-insensitive substring, in catalog order.
pub fn suggest<'a>(works: &'a [Work], query: &str) -> Vec<&'a Work> {
    let needle = query.to_lowercase();
    works
        .iter()
        .filter(|w| w.title.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}
