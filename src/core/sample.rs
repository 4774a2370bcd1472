/// One draw of `n` i.i.d. values from a sampler.
///
/// Order is the order of generation; estimators treat it as a multiset.
pub type Sample = Vec<f64>;
