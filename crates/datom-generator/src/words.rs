//! Lorem ipsum word pool for free-text values.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium", "doloremque",
    "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis", "et", "quasi",
    "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur", "odit", "fugit",
    "sed", "quia", "consequuntur", "magni", "dolores", "eos", "qui", "ratione", "sequi",
    "nesciunt", "neque", "dolorem", "ipsum", "dolor", "amet", "consectetur", "adipisci", "velit",
    "non", "numquam", "eius", "modi", "tempora", "incidunt", "ut", "labore", "dolore", "magnam",
    "aliquam", "quaerat", "enim", "minima", "veniam", "quis", "nostrum", "exercitationem",
    "ullam", "corporis", "nemo", "ipsam", "voluptas", "suscipit", "laboriosam", "nisi",
    "aliquid", "ex", "ea", "commodi", "autem", "vel", "eum", "iure", "reprehenderit", "in",
    "voluptate", "esse", "quam", "nihil", "molestiae", "iusto", "odio", "dignissimos", "ducimus",
    "blanditiis", "praesentium", "laudantium", "totam", "rem", "voluptatum", "deleniti",
    "atque", "corrupti", "quos", "quas", "molestias", "excepturi", "sint", "occaecati",
    "cupiditate", "provident", "perspiciatis", "unde", "omnis", "iste", "natus", "error",
    "similique", "culpa", "officia", "deserunt", "mollitia", "animi", "id", "est", "laborum",
    "dolorum", "fuga", "harum", "quidem", "rerum", "facilis", "expedita", "distinctio", "nam",
    "libero", "tempore", "cum", "soluta", "nobis", "eligendi", "optio", "cumque", "impedit",
    "quo", "porro", "quisquam", "maxime", "placeat", "facere", "possimus", "assumenda",
    "repellendus", "temporibus", "quibusdam", "officiis", "debitis", "saepe", "eveniet",
    "voluptates", "repudiandae", "recusandae", "itaque", "earum", "hic", "tenetur", "sapiente",
    "delectus", "reiciendis", "voluptatibus", "maiores", "doloribus", "asperiores", "repellat",
];

/// Join `count` random words from [`WORDS`] with single spaces.
pub fn lorem_words<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        if i > 0 {
            out.push(' ');
        }
        // WORDS is a non-empty constant
        if let Some(word) = WORDS.choose(rng) {
            out.push_str(word);
        }
    }
    out
}
