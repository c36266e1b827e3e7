//! Main generator producing datom rows.

use crate::words::lorem_words;
use datom_core::{Attribute, EntityDensity, EntityType, Field, NewDatom};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Number of words in every generated value.
pub const VALUE_WORDS: usize = 3;

/// Generator of random datom rows.
///
/// With a seed the output is reproducible; without one the RNG is seeded
/// from the operating system.
pub struct DataGenerator {
    density: EntityDensity,
    rng: StdRng,
    /// Number of rows generated so far.
    index: u64,
}

impl DataGenerator {
    pub fn new(density: EntityDensity, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            density,
            rng,
            index: 0,
        }
    }

    pub fn density(&self) -> &EntityDensity {
        &self.density
    }

    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next row.
    pub fn next_row(&mut self) -> NewDatom {
        let e = self.rng.random_range(1..=self.density.entity_count());
        let a = self.random_attribute();
        let v = lorem_words(&mut self.rng, VALUE_WORDS);
        self.index += 1;
        NewDatom::new(e, a, v)
    }

    /// Lazily generate `count` rows.
    pub fn rows(&mut self, count: u64) -> DatomIterator<'_> {
        DatomIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate the full configured row count in memory.
    pub fn generate_all(&mut self) -> Vec<NewDatom> {
        let total = self.density.total_rows();
        self.rows(total).collect()
    }

    fn random_attribute(&mut self) -> Attribute {
        // Both pools are non-empty constants
        let entity_type = *EntityType::ALL
            .choose(&mut self.rng)
            .unwrap_or(&EntityType::Person);
        let field = *Field::ALL.choose(&mut self.rng).unwrap_or(&Field::Name);
        Attribute::new(entity_type, field)
    }
}

/// Iterator that lazily generates rows.
pub struct DatomIterator<'a> {
    generator: &'a mut DataGenerator,
    remaining: u64,
}

impl Iterator for DatomIterator<'_> {
    type Item = NewDatom;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_row())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DatomIterator<'_> {}
