//! Built-in model series table.
//!
//! Order matters: a rule only sees identifiers every earlier rule passed on,
//! so date-qualified and prefixed variants sit above their bare forms.

pub(crate) enum SeriesExtract {
    Full,
    Static,
    Literal(&'static str),
}

use SeriesExtract::{Full, Literal, Static};

pub(crate) const SERIES_RULES: &[(&str, &str, SeriesExtract)] = &[
    ("gzy", r"yx_gzy_jj", Literal("gzy")),
    // Y and jy batches must outrank the catch-all xm_jj below
    ("jj_Y", r"xm_jj_Y\d+_072[5-7]", Literal("jj_Y")),
    ("jj_jy", r"xm_jj_jy_07(?:16|24)", Literal("jj_jy")),
    ("xm_jj", r"xm_jj", Literal("xm_jj")),
    ("jj_A", r"jj_A\d+", Literal("jj_A")),
    ("lt_LKltjja", r"lt_LKltjja[\d-]+", Full),
    ("lt_LXjja", r"lt_LXjja[\d-]+", Full),
    ("lt_LKjja", r"lt_LKjja[\d-]+", Full),
    ("lt_jja", r"lt_jja[\d.-]+", Full),
    ("lt_ltjja", r"lt_ltjja[\d-]+", Full),
    ("LKXjja", r"LKXjja[\d-]+", Full),
    ("LKjja", r"LKjja[\d-]+", Full),
    ("Lk12a20-1", r"Lk12a20-1", Full),
    ("jja", r"jja[\d-]+", Full),
    ("LXda", r"LXda\d+", Full),
    ("LXd", r"LXd\d+", Full),
    ("x", r"x\d+", Full),
    ("u", r"u\d+", Full),
    ("rt_dj", r"rt[_-]dj", Literal("rt_dj")),
    ("rz_dj", r"rz_dj", Static),
    ("rz_bc", r"rz[_-]bc", Literal("rz_bc")),
    ("apbc", r"apbc\d+", Full),
    // kj-bc-v20 -> v20
    ("bc_v", r"bc[_-](?P<series>v\d+)", Full),
    ("v20", r"v20(?:[-_]|\s)", Literal("v20")),
    ("dated_bc", r"\d{4}-bc", Literal("bc")),
    ("bc0", r"bc0\d+", Full),
    ("rt_bc", r"rt_bc", Static),
    ("bc", r"bc_", Static),
];
