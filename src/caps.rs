// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Standard capability names by position in the compiled database
//!
//! A slot whose index is past the end of a table has no standard name. Newer
//! databases may carry such slots, and decoders skip them.

const BOOL_NAMES: [&str; 37] = [
    "bw", "am", "xsb", "xhp", "xenl", "eo", "gn", "hc", "km", "hs", "in", "db", "da", "mir",
    "msgr", "os", "eslok", "xt", "hz", "ul", "xon", "nxon", "mc5i", "chts", "nrrmc", "npc",
    "ndscr", "ccc", "bce", "hls", "xhpa", "crxm", "daisy", "xvpa", "sam", "cpix", "lpix",
];

const NUM_NAMES: [&str; 16] = [
    "cols", "it", "lines", "lm", "xmc", "pb", "vt", "wsl", "nlab", "lh", "lw", "ma", "wnum",
    "colors", "pairs", "ncv",
];

const STR_NAMES: [&str; 414] = [
    "cbt", "bel", "cr", "csr", "tbc", "clear", "el", "ed", "hpa", "cmdch", "cup", "cud1", "home",
    "civis", "cub1", "mrcup", "cnorm", "cuf1", "ll", "cuu1", "cvvis", "dch1", "dl1", "dsl", "hd",
    "smacs", "blink", "bold", "smcup", "smdc", "dim", "smir", "invis", "prot", "rev", "smso",
    "smul", "ech", "rmacs", "sgr0", "rmcup", "rmdc", "rmir", "rmso", "rmul", "flash", "ff", "fsl",
    "is1", "is2", "is3", "if", "ich1", "il1", "ip", "kbs", "ktbc", "kclr", "kctab", "kdch1",
    "kdl1", "kcud1", "krmir", "kel", "ked", "kf0", "kf1", "kf10", "kf2", "kf3", "kf4", "kf5",
    "kf6", "kf7", "kf8", "kf9", "khome", "kich1", "kil1", "kcub1", "kll", "knp", "kpp", "kcuf1",
    "kind", "kri", "khts", "kcuu1", "rmkx", "smkx", "lf0", "lf1", "lf10", "lf2", "lf3", "lf4",
    "lf5", "lf6", "lf7", "lf8", "lf9", "rmm", "smm", "nel", "pad", "dch", "dl", "cud", "ich",
    "indn", "il", "cub", "cuf", "rin", "cuu", "pfkey", "pfloc", "pfx", "mc0", "mc4", "mc5", "rep",
    "rs1", "rs2", "rs3", "rf", "rc", "vpa", "sc", "ind", "ri", "sgr", "hts", "wind", "ht", "tsl",
    "uc", "hu", "iprog", "ka1", "ka3", "kb2", "kc1", "kc3", "mc5p", "rmp", "acsc", "pln", "kcbt",
    "smxon", "rmxon", "smam", "rmam", "xonc", "xoffc", "enacs", "smln", "rmln", "kbeg", "kcan",
    "kclo", "kcmd", "kcpy", "kcrt", "kend", "kent", "kext", "kfnd", "khlp", "kmrk", "kmsg", "kmov",
    "knxt", "kopn", "kopt", "kprv", "kprt", "krdo", "kref", "krfr", "krpl", "krst", "kres", "ksav",
    "kspd", "kund", "kBEG", "kCAN", "kCMD", "kCPY", "kCRT", "kDC", "kDL", "kslt", "kEND", "kEOL",
    "kEXT", "kFND", "kHLP", "kHOM", "kIC", "kLFT", "kMSG", "kMOV", "kNXT", "kOPT", "kPRV", "kPRT",
    "kRDO", "kRPL", "kRIT", "kRES", "kSAV", "kSPD", "kUND", "rfi", "kf11", "kf12", "kf13", "kf14",
    "kf15", "kf16", "kf17", "kf18", "kf19", "kf20", "kf21", "kf22", "kf23", "kf24", "kf25", "kf26",
    "kf27", "kf28", "kf29", "kf30", "kf31", "kf32", "kf33", "kf34", "kf35", "kf36", "kf37", "kf38",
    "kf39", "kf40", "kf41", "kf42", "kf43", "kf44", "kf45", "kf46", "kf47", "kf48", "kf49", "kf50",
    "kf51", "kf52", "kf53", "kf54", "kf55", "kf56", "kf57", "kf58", "kf59", "kf60", "kf61", "kf62",
    "kf63", "el1", "mgc", "smgl", "smgr", "fln", "sclk", "dclk", "rmclk", "cwin", "wingo", "hup",
    "dial", "qdial", "tone", "pulse", "hook", "pause", "wait", "u0", "u1", "u2", "u3", "u4", "u5",
    "u6", "u7", "u8", "u9", "op", "oc", "initc", "initp", "scp", "setf", "setb", "cpi", "lpi",
    "chr", "cvr", "defc", "swidm", "sdrfq", "sitm", "slm", "smicm", "snlq", "snrmq", "sshm",
    "ssubm", "ssupm", "sum", "rwidm", "ritm", "rlm", "rmicm", "rshm", "rsubm", "rsupm", "rum",
    "mhpa", "mcud1", "mcub1", "mcuf1", "mvpa", "mcuu1", "porder", "mcud", "mcub", "mcuf", "mcuu",
    "scs", "smgb", "smgbp", "smglp", "smgrp", "smgt", "smgtp", "sbim", "scsd", "rbim", "rcsd",
    "subcs", "supcs", "docr", "zerom", "csnm", "kmous", "minfo", "reqmp", "getm", "setaf", "setab",
    "pfxl", "devt", "csin", "s0ds", "s1ds", "s2ds", "s3ds", "smglr", "smgtb", "birep", "binel",
    "bicr", "colornm", "defbi", "endbi", "setcolor", "slines", "dispc", "smpch", "rmpch", "smsc",
    "rmsc", "pctrm", "scesc", "scesa", "ehhlm", "elhlm", "elohlm", "erhlm", "ethlm", "evhlm",
    "sgr1", "slength", "OTi2", "OTrs", "OTnl", "OTbs", "OTko", "OTma", "OTG2", "OTG3", "OTG1",
    "OTG4", "OTGR", "OTGL", "OTGU", "OTGD", "OTGH", "OTGV", "OTGC", "meml", "memu", "box1",
];

/// Name of the boolean capability in slot `index`
#[must_use]
pub fn boolean_name(index: usize) -> Option<&'static str> {
    BOOL_NAMES.get(index).copied()
}

/// Name of the numeric capability in slot `index`
#[must_use]
pub fn number_name(index: usize) -> Option<&'static str> {
    NUM_NAMES.get(index).copied()
}

/// Name of the string capability in slot `index`
#[must_use]
pub fn string_name(index: usize) -> Option<&'static str> {
    STR_NAMES.get(index).copied()
}

/// Slot of the standard boolean capability `name`
#[must_use]
pub fn boolean_index(name: &str) -> Option<usize> {
    BOOL_NAMES.iter().position(|x| *x == name)
}

/// Slot of the standard numeric capability `name`
#[must_use]
pub fn number_index(name: &str) -> Option<usize> {
    NUM_NAMES.iter().position(|x| *x == name)
}

/// Slot of the standard string capability `name`
#[must_use]
pub fn string_index(name: &str) -> Option<usize> {
    STR_NAMES.iter().position(|x| *x == name)
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn boolean_bounds() {
        for index in 0..=36 {
            assert!(boolean_name(index).is_some(), "boolean slot {index}");
        }
        assert_eq!(boolean_name(0), Some("bw"));
        assert_eq!(boolean_name(36), Some("lpix"));
        assert_eq!(boolean_name(37), None);
    }

    #[test]
    fn number_bounds() {
        for index in 0..=15 {
            assert!(number_name(index).is_some(), "numeric slot {index}");
        }
        assert_eq!(number_name(0), Some("cols"));
        assert_eq!(number_name(13), Some("colors"));
        assert_eq!(number_name(15), Some("ncv"));
        assert_eq!(number_name(16), None);
    }

    #[test]
    fn string_bounds() {
        assert_eq!(string_name(0), Some("cbt"));
        assert_eq!(string_name(10), Some("cup"));
        assert_eq!(string_name(413), Some("box1"));
        assert_eq!(string_name(414), None);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(boolean_index("xenl"), Some(4));
        assert_eq!(number_index("lines"), Some(2));
        assert_eq!(string_index("sgr0"), Some(39));
        assert_eq!(string_index("Smulx"), None);
        for index in 0..STR_NAMES.len() {
            assert_eq!(string_name(index).and_then(string_index), Some(index));
        }
    }

    #[test]
    fn unique_names() {
        assert_eq!(BTreeSet::from(BOOL_NAMES).len(), BOOL_NAMES.len());
        assert_eq!(BTreeSet::from(NUM_NAMES).len(), NUM_NAMES.len());
    }
}
