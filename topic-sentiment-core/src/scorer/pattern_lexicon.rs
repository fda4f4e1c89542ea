#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
    // adverbs that scale the next rated word ("very good")
    pub modifier: bool,
}

const fn adjective(word: &'static str, polarity: f64, subjectivity: f64) -> (&'static str, PatternEntry) {
    (word, PatternEntry {
        polarity,
        subjectivity,
        intensity: 1.0,
        modifier: false,
    })
}

const fn adverb(word: &'static str, polarity: f64, subjectivity: f64, intensity: f64) -> (&'static str, PatternEntry) {
    (word, PatternEntry {
        polarity,
        subjectivity,
        intensity,
        modifier: true,
    })
}

pub const BUILTIN_ENTRIES: &[(&str, PatternEntry)] = &[
    adverb("absolutely", 0.2, 0.9, 1.8),
    adverb("completely", 0.1, 0.4, 1.6),
    adverb("extremely", 0.0, 1.0, 1.8),
    adverb("highly", 0.16, 0.54, 1.6),
    adverb("incredibly", 0.9, 0.9, 1.8),
    adverb("pretty", 0.25, 1.0, 1.2),
    adverb("quite", 0.0, 1.0, 1.1),
    adverb("rather", 0.0, 0.6, 0.9),
    adverb("really", 0.2, 0.2, 1.4),
    adverb("slightly", -0.17, 0.33, 0.6),
    adverb("somewhat", 0.0, 0.3, 0.7),
    adverb("too", 0.0, 0.2, 1.2),
    adverb("totally", 0.0, 0.75, 1.7),
    adverb("very", 0.2, 0.3, 1.3),
    adjective("amazing", 0.6, 0.9),
    adjective("angry", -0.5, 1.0),
    adjective("annoying", -0.8, 0.9),
    adjective("average", -0.15, 0.4),
    adjective("awesome", 1.0, 1.0),
    adjective("awful", -1.0, 1.0),
    adjective("bad", -0.7, 0.67),
    adjective("beautiful", 0.85, 1.0),
    adjective("best", 1.0, 0.3),
    adjective("better", 0.5, 0.5),
    adjective("big", 0.0, 0.1),
    adjective("black", -0.17, 0.43),
    adjective("blue", 0.0, 0.1),
    adjective("boring", -1.0, 1.0),
    adjective("brilliant", 0.9, 1.0),
    adjective("broken", -0.4, 0.4),
    adjective("buggy", -0.5, 0.6),
    adjective("cheap", 0.4, 0.7),
    adjective("clean", 0.37, 0.69),
    adjective("clear", 0.1, 0.38),
    adjective("clever", 0.5, 1.0),
    adjective("complex", -0.3, 0.4),
    adjective("confusing", -0.3, 0.5),
    adjective("cool", 0.35, 0.65),
    adjective("crazy", -0.6, 0.9),
    adjective("cute", 0.5, 1.0),
    adjective("dangerous", -0.6, 0.9),
    adjective("dead", -0.2, 0.4),
    adjective("difficult", -0.5, 1.0),
    adjective("dirty", -0.6, 0.8),
    adjective("disappointed", -0.75, 0.75),
    adjective("disappointing", -0.6, 0.7),
    adjective("disaster", -0.8, 0.9),
    adjective("disastrous", -0.7, 0.9),
    adjective("dreadful", -1.0, 1.0),
    adjective("dumb", -0.38, 0.5),
    adjective("easy", 0.43, 0.83),
    adjective("elegant", 0.5, 1.0),
    adjective("enjoyable", 0.5, 0.6),
    adjective("excellent", 1.0, 1.0),
    adjective("excited", 0.38, 0.75),
    adjective("exciting", 0.3, 0.8),
    adjective("expensive", -0.5, 0.7),
    adjective("fabulous", 0.4, 0.9),
    adjective("fantastic", 0.4, 0.9),
    adjective("fast", 0.2, 0.6),
    adjective("favorite", 0.5, 1.0),
    adjective("fine", 0.42, 0.5),
    adjective("free", 0.4, 0.8),
    adjective("frustrating", -0.4, 0.6),
    adjective("fun", 0.3, 0.2),
    adjective("funny", 0.25, 1.0),
    adjective("glad", 0.5, 1.0),
    adjective("good", 0.7, 0.6),
    adjective("great", 0.8, 0.75),
    adjective("happy", 0.8, 1.0),
    adjective("hard", -0.29, 0.54),
    adjective("hate", -0.8, 0.9),
    adjective("hated", -0.9, 0.7),
    adjective("helpful", 0.5, 0.5),
    adjective("high", 0.16, 0.54),
    adjective("horrible", -1.0, 1.0),
    adjective("huge", 0.4, 0.9),
    adjective("impressive", 1.0, 1.0),
    adjective("interesting", 0.5, 0.5),
    adjective("lazy", -0.25, 0.5),
    adjective("long", -0.05, 0.4),
    adjective("love", 0.5, 0.6),
    adjective("loved", 0.7, 0.8),
    adjective("lovely", 0.5, 0.75),
    adjective("low", 0.0, 0.3),
    adjective("lucky", 0.33, 1.0),
    adjective("mad", -0.62, 1.0),
    adjective("messy", -0.2, 0.6),
    adjective("miserable", -1.0, 1.0),
    adjective("new", 0.14, 0.45),
    adjective("nice", 0.6, 1.0),
    adjective("old", 0.1, 0.2),
    adjective("outstanding", 0.5, 0.75),
    adjective("painful", -0.7, 0.9),
    adjective("pathetic", -1.0, 1.0),
    adjective("perfect", 1.0, 1.0),
    adjective("pleasant", 0.73, 0.97),
    adjective("pleased", 0.5, 1.0),
    adjective("poor", -0.4, 0.6),
    adjective("popular", 0.6, 0.9),
    adjective("powerful", 0.3, 1.0),
    adjective("productive", 0.5, 0.5),
    adjective("red", 0.0, 0.0),
    adjective("reliable", 0.5, 0.5),
    adjective("ridiculous", -0.33, 1.0),
    adjective("sad", -0.5, 1.0),
    adjective("safe", 0.5, 0.5),
    adjective("serious", -0.33, 0.67),
    adjective("simple", 0.0, 0.36),
    adjective("slow", -0.3, 0.39),
    adjective("small", -0.25, 0.4),
    adjective("smart", 0.21, 0.64),
    adjective("stable", 0.3, 0.4),
    adjective("strange", 0.0, 0.15),
    adjective("strong", 0.43, 0.73),
    adjective("stupid", -0.8, 1.0),
    adjective("sucks", -0.3, 0.3),
    adjective("superb", 1.0, 1.0),
    adjective("terrible", -1.0, 1.0),
    adjective("thankful", 0.5, 0.6),
    adjective("ugly", -0.7, 1.0),
    adjective("unhappy", -0.6, 0.9),
    adjective("unstable", -0.2, 0.6),
    adjective("useful", 0.3, 0.0),
    adjective("useless", -0.5, 0.2),
    adjective("weird", -0.5, 1.0),
    adjective("wonderful", 1.0, 1.0),
    adjective("worse", -0.4, 0.6),
    adjective("worst", -1.0, 1.0),
    adjective("worthless", -0.8, 0.9),
    adjective("wrong", -0.5, 0.9),
];

pub const NEGATIONS: &[&str] = &["not", "n't", "never", "no"];

// (emoticon, polarity); matched case-insensitively against whole tokens
pub const EMOTICONS: &[(&str, f64)] = &[
    (":)", 0.5),
    (":-)", 0.5),
    ("=)", 0.5),
    (":d", 1.0),
    (":-d", 1.0),
    ("xd", 1.0),
    (";)", 0.25),
    (";-)", 0.25),
    ("<3", 1.0),
    (":(", -0.75),
    (":-(", -0.75),
    (":'(", -1.0),
    (":/", -0.5),
    (":-/", -0.5),
];
