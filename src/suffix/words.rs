//! Curated word lists for word-mode suffixes.
//!
//! Every entry is a single lowercase ASCII word without hyphens.

/// Adjectives; every word of a slug but the last.
pub const ADJECTIVES: &[&str] = &[
    "able", "ancient", "bold", "brave", "breezy", "bright", "brisk", "calm", "candid", "careful",
    "cheerful", "clever", "cozy", "crisp", "curious", "daring", "dazzling", "eager", "early",
    "earnest", "easy", "elegant", "fancy", "fast", "fearless", "fierce", "fluffy", "fresh",
    "friendly", "frosty", "gentle", "giant", "gifted", "glad", "gleaming", "golden", "graceful",
    "grand", "happy", "hardy", "helpful", "honest", "humble", "icy", "jolly", "joyful", "keen",
    "kind", "large", "lively", "loud", "loyal", "lucky", "magic", "merry", "mighty", "misty",
    "modern", "nimble", "noble", "odd", "orange", "polite", "proud", "quick", "quiet", "rapid",
    "rare", "ready", "regal", "rich", "robust", "rosy", "round", "royal", "rustic", "shiny",
    "silent", "silly", "silver", "simple", "sleek", "slim", "smart", "smooth", "snowy", "soft",
    "solid", "sparkling", "speedy", "spicy", "steady", "stormy", "strong", "sturdy", "sunny",
    "super", "swift", "tall", "tidy", "tiny", "tough", "tranquil", "vast", "vivid", "warm",
    "wild", "windy", "wise", "witty", "young", "zany", "zealous",
];

/// Nouns; the last word of a multi-word slug.
pub const NOUNS: &[&str] = &[
    "acorn", "apple", "arrow", "badger", "banana", "beacon", "bear", "beaver", "bison", "breeze",
    "brook", "cactus", "canyon", "castle", "cedar", "cherry", "cloud", "comet", "coral", "cougar",
    "crane", "creek", "crystal", "daisy", "delta", "dolphin", "dragon", "eagle", "ember",
    "falcon", "fern", "finch", "forest", "fox", "galaxy", "garden", "gecko", "glacier", "harbor",
    "hawk", "hazel", "heron", "hill", "island", "jaguar", "jasper", "kettle", "koala", "lagoon",
    "lake", "lantern", "lemon", "leopard", "lily", "lion", "lotus", "maple", "meadow", "meteor",
    "moon", "moose", "mountain", "nebula", "oak", "ocean", "orchid", "otter", "owl", "panda",
    "panther", "pebble", "pepper", "pine", "planet", "pond", "puffin", "quartz", "rabbit",
    "raven", "reef", "river", "robin", "rocket", "sapphire", "shadow", "shark", "sparrow",
    "spruce", "squirrel", "star", "stone", "storm", "summit", "sun", "swan", "thunder", "tiger",
    "topaz", "tulip", "turtle", "valley", "violet", "volcano", "walrus", "whale", "willow",
    "wolf", "wombat", "zebra",
];
