pub mod mi;

pub use mi::{
    contains, mine, sample_database, support, Database, Discretizer, FrequentLevel,
    FrequentSequenceTable, Miner, MiningConfig, MiningError, MiningResult, Pattern, TimeBucket,
    Transaction,
};

#[cfg(feature = "python")]
use numpy::ndarray::Array2;
#[cfg(feature = "python")]
use numpy::{IntoPyArray, PyArray2};
#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
type PyBucket = (i64, Option<i64>);

#[cfg(feature = "python")]
type PyTransactions = Vec<Vec<(String, i64)>>;

#[cfg(feature = "python")]
fn to_py_err(err: MiningError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

#[cfg(feature = "python")]
fn build_inputs(transactions: PyTransactions, buckets: Vec<PyBucket>) -> PyResult<(Database, Vec<TimeBucket>)> {
    let database = transactions
        .into_iter()
        .map(Transaction::new)
        .collect::<MiningResult<Database>>()
        .map_err(to_py_err)?;
    let buckets = buckets
        .into_iter()
        .map(|(low, high)| TimeBucket { low, high })
        .collect();
    Ok((database, buckets))
}

/// Dense `k x k` view of a timing matrix; cells without a constraint hold -1.
#[cfg(feature = "python")]
fn dense_timings(pattern: &Pattern) -> Array2<i64> {
    let k = pattern.len();
    let mut dense = Array2::from_elem((k, k), -1i64);
    for i in 1..k {
        for (j, &bucket) in pattern.timings().row(i).iter().enumerate() {
            dense[[i, j]] = bucket as i64;
        }
    }
    dense
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "mine")]
fn mine_py<'py>(
    py: Python<'py>,
    transactions: PyTransactions,
    buckets: Vec<PyBucket>,
    min_support: f64,
    max_length: usize,
) -> PyResult<Vec<Vec<(Vec<String>, Bound<'py, PyArray2<i64>>, usize)>>> {
    let (database, buckets) = build_inputs(transactions, buckets)?;
    let config = MiningConfig::new(min_support, max_length, buckets);
    let table = mine(&database, config).map_err(to_py_err)?;

    let mut result = Vec::with_capacity(table.max_pattern_len());
    for level in table.iter() {
        let patterns = level
            .iter_with_support()
            .map(|(pattern, count)| {
                (pattern.items().to_vec(), dense_timings(pattern).into_pyarray(py), count)
            })
            .collect();
        result.push(patterns);
    }

    Ok(result)
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "support")]
fn support_py(
    transactions: PyTransactions,
    buckets: Vec<PyBucket>,
    items: Vec<String>,
    timings: Vec<usize>,
) -> PyResult<f64> {
    let (database, buckets) = build_inputs(transactions, buckets)?;
    let config = MiningConfig::default().with_buckets(buckets);
    let miner = Miner::new(&database, config).map_err(to_py_err)?;
    let pattern = Pattern::new(items, timings).map_err(to_py_err)?;
    miner.support(&pattern).map_err(to_py_err)
}

#[cfg(feature = "python")]
#[pymodule]
fn mi_apriori(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_py, m)?)?;
    m.add_function(wrap_pyfunction!(support_py, m)?)?;
    Ok(())
}
