//! 规则标注器使用的静态词表
//!
//! 键一律为小写。

use phf::{phf_map, phf_set};

/// 封闭词类及高频动词 → Penn 标签
pub static WORD_TAGS: phf::Map<&'static str, &'static str> = phf_map! {
    // 限定词
    "a" => "DT", "an" => "DT", "the" => "DT", "this" => "DT", "these" => "DT",
    "those" => "DT", "each" => "DT", "every" => "DT", "some" => "DT", "any" => "DT",
    "no" => "DT", "all" => "DT", "both" => "DT", "another" => "DT", "either" => "DT",
    "neither" => "DT",
    // 介词 / 从属连词
    "of" => "IN", "in" => "IN", "on" => "IN", "at" => "IN", "by" => "IN", "for" => "IN",
    "with" => "IN", "about" => "IN", "against" => "IN", "between" => "IN",
    "into" => "IN", "through" => "IN", "during" => "IN", "before" => "IN",
    "after" => "IN", "above" => "IN", "below" => "IN", "from" => "IN", "up" => "IN",
    "down" => "IN", "out" => "IN", "off" => "IN", "over" => "IN", "under" => "IN",
    "since" => "IN", "until" => "IN", "while" => "IN", "because" => "IN",
    "although" => "IN", "though" => "IN", "if" => "IN", "unless" => "IN",
    "whether" => "IN", "as" => "IN", "like" => "IN", "than" => "IN",
    "without" => "IN", "within" => "IN", "across" => "IN", "along" => "IN",
    "among" => "IN", "around" => "IN", "behind" => "IN", "beyond" => "IN",
    "despite" => "IN", "near" => "IN", "toward" => "IN", "towards" => "IN",
    "upon" => "IN", "via" => "IN", "throughout" => "IN", "per" => "IN",
    "that" => "IN",
    "to" => "TO",
    // 并列连词
    "and" => "CC", "or" => "CC", "but" => "CC", "nor" => "CC", "yet" => "CC",
    // 代词
    "i" => "PRP", "me" => "PRP", "we" => "PRP", "us" => "PRP", "you" => "PRP",
    "he" => "PRP", "him" => "PRP", "she" => "PRP", "it" => "PRP", "they" => "PRP",
    "them" => "PRP", "myself" => "PRP", "ourselves" => "PRP", "yourself" => "PRP",
    "himself" => "PRP", "herself" => "PRP", "itself" => "PRP",
    "themselves" => "PRP",
    "my" => "PRP$", "our" => "PRP$", "your" => "PRP$", "his" => "PRP$",
    "her" => "PRP$", "its" => "PRP$", "their" => "PRP$",
    // 疑问词 / 关系词
    "which" => "WDT", "whatever" => "WDT", "who" => "WP", "whom" => "WP",
    "what" => "WP", "whose" => "WP$", "when" => "WRB", "where" => "WRB",
    "why" => "WRB", "how" => "WRB",
    "there" => "EX",
    // 情态动词
    "can" => "MD", "could" => "MD", "may" => "MD", "might" => "MD", "must" => "MD",
    "shall" => "MD", "should" => "MD", "will" => "MD", "would" => "MD",
    // be / have / do
    "be" => "VB", "is" => "VBZ", "are" => "VBP", "was" => "VBD", "were" => "VBD",
    "been" => "VBN", "being" => "VBG", "am" => "VBP",
    "have" => "VBP", "has" => "VBZ", "had" => "VBD", "having" => "VBG",
    "do" => "VBP", "does" => "VBZ", "did" => "VBD", "done" => "VBN",
    // 高频实义动词
    "include" => "VBP", "includes" => "VBZ", "enable" => "VB", "enables" => "VBZ",
    "make" => "VB", "makes" => "VBZ", "made" => "VBD", "use" => "VB", "uses" => "VBZ",
    "become" => "VB", "becomes" => "VBZ", "became" => "VBD", "show" => "VB",
    "shows" => "VBZ", "shown" => "VBN", "take" => "VB", "takes" => "VBZ",
    "took" => "VBD", "give" => "VB", "gives" => "VBZ", "gave" => "VBD",
    "get" => "VB", "gets" => "VBZ", "got" => "VBD", "go" => "VB", "goes" => "VBZ",
    "went" => "VBD", "know" => "VB", "knows" => "VBZ", "knew" => "VBD",
    "known" => "VBN", "see" => "VB", "sees" => "VBZ", "saw" => "VBD", "seen" => "VBN",
    "find" => "VB", "finds" => "VBZ", "found" => "VBD", "think" => "VB",
    "thought" => "VBD", "say" => "VB", "says" => "VBZ", "said" => "VBD",
    "grow" => "VB", "grows" => "VBZ", "grew" => "VBD", "grown" => "VBN",
    "begin" => "VB", "began" => "VBD", "begun" => "VBN", "lead" => "VB",
    "leads" => "VBZ", "led" => "VBD", "bring" => "VB", "brings" => "VBZ",
    "brought" => "VBD", "keep" => "VB", "keeps" => "VBZ", "kept" => "VBD",
    "hold" => "VB", "holds" => "VBZ", "held" => "VBD", "write" => "VB",
    "wrote" => "VBD", "written" => "VBN", "build" => "VB", "builds" => "VBZ",
    "built" => "VBD", "seem" => "VB", "seems" => "VBZ", "remain" => "VB",
    "remains" => "VBZ", "require" => "VB", "requires" => "VBZ", "provide" => "VB",
    "provides" => "VBZ", "allow" => "VB", "allows" => "VBZ", "help" => "VB",
    "helps" => "VBZ", "continue" => "VB", "continues" => "VBZ", "raise" => "VB",
    "raises" => "VBZ", "refer" => "VB", "refers" => "VBZ", "focus" => "VB",
    "focuses" => "VBZ", "promise" => "VB", "promises" => "VBZ", "offer" => "VB",
    "offers" => "VBZ", "act" => "VB", "acts" => "VBZ", "assist" => "VB",
    "assists" => "VBZ", "analyze" => "VB", "analyzes" => "VBZ", "identify" => "VB",
    "identifies" => "VBZ", "convert" => "VB", "converts" => "VBZ",
    "generate" => "VB", "generates" => "VBZ", "transform" => "VB",
    "transforms" => "VBZ", "solve" => "VB", "solves" => "VBZ",
    "communicate" => "VB", "navigate" => "VB", "work" => "VB",
    "improve" => "VB", "improves" => "VBZ", "learn" => "VB", "learns" => "VBZ",
    "perform" => "VB", "performs" => "VBZ", "shift" => "VB",
    // 高频副词
    "not" => "RB", "very" => "RB", "also" => "RB", "often" => "RB", "always" => "RB",
    "never" => "RB", "sometimes" => "RB", "still" => "RB", "already" => "RB",
    "now" => "RB", "then" => "RB", "here" => "RB", "so" => "RB", "too" => "RB",
    "just" => "RB", "only" => "RB", "even" => "RB", "again" => "RB",
    "forever" => "RB", "together" => "RB", "however" => "RB", "therefore" => "RB",
    "thus" => "RB", "once" => "RB", "soon" => "RB", "later" => "RB", "ago" => "RB",
    "well" => "RB", "almost" => "RB", "further" => "RB", "instead" => "RB",
    "away" => "RB", "rather" => "RB", "quite" => "RB", "perhaps" => "RB",
    "more" => "RBR", "less" => "RBR", "most" => "RBS", "least" => "RBS",
    // 数词
    "one" => "CD", "two" => "CD", "three" => "CD", "four" => "CD", "five" => "CD",
    "six" => "CD", "seven" => "CD", "eight" => "CD", "nine" => "CD", "ten" => "CD",
    "hundred" => "CD", "thousand" => "CD", "million" => "CD", "billion" => "CD",
};

/// 常见形容词（后缀规则无法覆盖的部分）
pub static ADJECTIVES: phf::Set<&'static str> = phf_set! {
    "new", "old", "big", "small", "large", "long", "short", "high", "low", "deep",
    "good", "bad", "great", "little", "young", "early", "late", "major", "minor",
    "main", "key", "vast", "complex", "human", "modern", "recent", "common",
    "simple", "hard", "easy", "strong", "weak", "free", "full", "whole", "real",
    "true", "false", "clear", "different", "important", "significant", "efficient",
    "sustainable", "current", "present", "global", "natural", "final", "first",
    "last", "next", "many", "much", "several", "various", "other", "such", "same",
    "own", "few", "certain", "explicit", "solar", "personalized", "larger",
    "powerful", "rapid", "safe", "fast", "slow", "dark", "bright", "warm", "cold",
};

/// 命中后缀规则但实为名词的词
pub static NOUN_EXCEPTIONS: phf::Set<&'static str> = phf_set! {
    "family", "supply", "reply", "assembly", "ally", "rally", "italy", "july",
    "topic", "music", "logic", "traffic", "panic", "clinic", "fabric", "mechanic",
    "animal", "signal", "material", "proposal", "approval", "capital", "hospital",
    "journal", "festival", "principal", "arrival", "survival", "archive", "motive",
    "objective", "detective", "native", "relative", "representative", "executive",
    "speed", "seed", "need", "feed", "greed", "hundred", "bed", "red",
    "thing", "king", "ring", "string", "spring", "wing", "evening", "morning",
    "ceiling", "building", "meaning", "painting", "feeling", "learning",
    "processing", "understanding", "reasoning", "programming",
};

/// 不在句末切分的缩写（不含末尾句点，小写）
pub static ABBREVIATIONS: phf::Set<&'static str> = phf_set! {
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "inc",
    "ltd", "co", "corp", "e.g", "i.e", "fig", "no", "vol", "approx", "dept", "est",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "u.s", "u.k", "a.m", "p.m",
};

/// 组织机构名常见成分
pub static ORGANIZATION_WORDS: phf::Set<&'static str> = phf_set! {
    "university", "institute", "company", "corporation", "inc", "ltd", "corp",
    "association", "agency", "organization", "organisation", "council", "committee",
    "bank", "party", "society", "foundation", "ministry", "department", "school",
    "college", "academy", "nations", "union", "group", "laboratory", "museum",
};

/// 其后的专有名词通常为地名
pub static LOCATION_CUES: phf::Set<&'static str> = phf_set! {
    "in", "at", "from", "near", "across", "throughout", "to", "into",
};

/// 形容词后缀
pub const ADJECTIVE_SUFFIXES: [&str; 10] = [
    "ous", "ful", "ive", "able", "ible", "ical", "ic", "al", "less", "ary",
];
