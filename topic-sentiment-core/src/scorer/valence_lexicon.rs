// Mean valence ratings on the -4..=4 scale. A curated subset of the rated social-media
// lexicon; a complete lexicon file can be configured instead.
pub const BUILTIN_VALENCES: &[(&str, f64)] = &[
    (":(", -1.9),
    (":)", 2.0),
    (":-(", -1.5),
    (":-)", 1.3),
    (":d", 2.3),
    (":-d", 2.3),
    (":'(", -2.2),
    (";)", 0.9),
    ("<3", 1.9),
    ("abandon", -1.9),
    ("abuse", -3.2),
    ("accept", 1.6),
    ("accomplish", 1.8),
    ("admire", 2.1),
    ("adorable", 2.2),
    ("advantage", 1.0),
    ("afraid", -2.2),
    ("aggressive", -0.6),
    ("agree", 1.5),
    ("alarm", -1.4),
    ("alone", -1.0),
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("apologize", 0.4),
    ("appreciate", 1.7),
    ("arrogant", -2.2),
    ("ashamed", -2.1),
    ("attack", -2.1),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("benefit", 2.0),
    ("best", 3.2),
    ("better", 1.9),
    ("bitter", -1.8),
    ("blame", -1.4),
    ("bless", 1.8),
    ("bored", -1.1),
    ("boring", -1.3),
    ("brave", 2.4),
    ("brilliant", 2.8),
    ("broken", -2.1),
    ("calm", 1.3),
    ("care", 2.2),
    ("careful", 0.6),
    ("celebrate", 2.7),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("clean", 1.7),
    ("clever", 2.0),
    ("comfortable", 2.3),
    ("complain", -1.5),
    ("confused", -1.3),
    ("confusing", -0.9),
    ("cool", 1.3),
    ("crap", -1.6),
    ("crash", -1.7),
    ("crazy", -1.4),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("cute", 2.0),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dead", -3.3),
    ("delight", 2.9),
    ("delighted", 3.0),
    ("depressed", -2.3),
    ("destroy", -2.5),
    ("difficult", -1.5),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("dislike", -1.6),
    ("disgusting", -2.4),
    ("dumb", -2.3),
    ("easy", 1.9),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("elegant", 2.1),
    ("embarrassed", -1.5),
    ("encourage", 2.3),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enthusiastic", 1.9),
    ("error", -1.7),
    ("evil", -3.4),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fair", 1.3),
    ("fake", -2.1),
    ("fantastic", 2.6),
    ("fault", -1.7),
    ("favorite", 2.0),
    ("fear", -2.2),
    ("fine", 0.8),
    ("fix", 1.1),
    ("fool", -1.9),
    ("free", 2.3),
    ("friendly", 2.2),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("fun", 2.3),
    ("funny", 1.9),
    ("garbage", -1.5),
    ("generous", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("greatest", 3.2),
    ("grief", -2.2),
    ("happy", 2.7),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("hell", -3.6),
    ("help", 1.7),
    ("helpful", 1.8),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeless", -2.0),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("ideal", 2.4),
    ("idiot", -2.3),
    ("ignore", -1.5),
    ("ill", -1.8),
    ("important", 0.8),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("inspiring", 2.4),
    ("interested", 1.7),
    ("interesting", 1.7),
    ("irritating", -2.0),
    ("joy", 2.8),
    ("kind", 2.4),
    ("kill", -3.7),
    ("lazy", -1.5),
    ("like", 2.0),
    ("liked", 1.8),
    ("lol", 1.8),
    ("lonely", -1.5),
    ("lose", -1.6),
    ("loss", -1.3),
    ("lost", -1.3),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("lucky", 1.6),
    ("mad", -2.2),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("miss", -0.6),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("nice", 1.8),
    ("no", -1.2),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("pain", -2.3),
    ("painful", -1.9),
    ("panic", -2.3),
    ("pathetic", -2.7),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("please", 1.3),
    ("pleased", 1.9),
    ("poor", -2.1),
    ("popular", 1.8),
    ("positive", 2.6),
    ("powerful", 1.8),
    ("pretty", 2.2),
    ("problem", -1.7),
    ("problems", -1.7),
    ("promising", 1.7),
    ("proud", 2.1),
    ("rage", -2.6),
    ("recommend", 1.5),
    ("relief", 2.1),
    ("reliable", 1.9),
    ("ridiculous", -1.5),
    ("risk", -1.1),
    ("rude", -2.0),
    ("ruin", -2.8),
    ("sad", -2.1),
    ("safe", 1.9),
    ("scared", -1.9),
    ("shame", -2.1),
    ("shit", -2.6),
    ("sick", -2.3),
    ("slow", -0.9),
    ("smart", 1.7),
    ("solid", 1.2),
    ("sorry", -0.3),
    ("stupid", -2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("suffer", -2.5),
    ("super", 2.9),
    ("support", 1.7),
    ("sure", 1.3),
    ("terrible", -2.1),
    ("terrific", 3.2),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("threat", -2.4),
    ("tired", -1.9),
    ("trouble", -1.7),
    ("trust", 2.3),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useful", 1.9),
    ("useless", -1.8),
    ("waste", -1.8),
    ("weak", -1.9),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worth", 0.9),
    ("wow", 2.8),
    ("wrong", -2.1),
    ("yay", 2.4),
    ("yes", 1.7),
];

// words that scale the intensity of the following sentiment word
pub const BOOSTER_INCREMENT: f64 = 0.293;
pub const BOOSTER_DECREMENT: f64 = -0.293;

pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("amazingly", BOOSTER_INCREMENT),
    ("awfully", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("considerably", BOOSTER_INCREMENT),
    ("decidedly", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("enormously", BOOSTER_INCREMENT),
    ("entirely", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT),
    ("exceptionally", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("fabulously", BOOSTER_INCREMENT),
    ("fully", BOOSTER_INCREMENT),
    ("greatly", BOOSTER_INCREMENT),
    ("hella", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("hugely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("intensely", BOOSTER_INCREMENT),
    ("majorly", BOOSTER_INCREMENT),
    ("more", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("particularly", BOOSTER_INCREMENT),
    ("purely", BOOSTER_INCREMENT),
    ("quite", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("remarkably", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("substantially", BOOSTER_INCREMENT),
    ("thoroughly", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("tremendously", BOOSTER_INCREMENT),
    ("uber", BOOSTER_INCREMENT),
    ("unbelievably", BOOSTER_INCREMENT),
    ("unusually", BOOSTER_INCREMENT),
    ("utterly", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("almost", BOOSTER_DECREMENT),
    ("barely", BOOSTER_DECREMENT),
    ("hardly", BOOSTER_DECREMENT),
    ("kinda", BOOSTER_DECREMENT),
    ("less", BOOSTER_DECREMENT),
    ("little", BOOSTER_DECREMENT),
    ("marginally", BOOSTER_DECREMENT),
    ("occasionally", BOOSTER_DECREMENT),
    ("partly", BOOSTER_DECREMENT),
    ("scarcely", BOOSTER_DECREMENT),
    ("slightly", BOOSTER_DECREMENT),
    ("somewhat", BOOSTER_DECREMENT),
    ("sorta", BOOSTER_DECREMENT),
];

pub const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
    "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];
