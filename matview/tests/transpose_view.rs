use matview::{
    CategoryKind, ColIterable, ColIterableMut, ColMatrixTag, CooMatrix, DenseMatrix,
    GenericMatrixTag, IndexedEntry, Matrix, MatrixElement, MatrixMut, RawIterable, RawIterableMut,
    RowColMatrixTag, RowIterable, RowIterableMut, RowMatrixTag, SparseColMatrix,
    SparseRowMatrix, Transpose, TransposeMatrix,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn init() {
    let _ = pretty_env_logger::try_init();
}

fn sparse_2x3() -> SparseRowMatrix<i64> {
    SparseRowMatrix::from_triplets(2, 3, [(0, 0, 1), (1, 2, 5)]).unwrap()
}

fn random_triplets(rng: &mut StdRng, nrows: usize, ncols: usize) -> Vec<(usize, usize, f64)> {
    let count = rng.gen_range(0..=nrows * ncols);
    (0..count)
        .map(|_| {
            (
                rng.gen_range(0..nrows),
                rng.gen_range(0..ncols),
                rng.gen_range(-100.0..100.0),
            )
        })
        .collect()
}

/// Every read of the view must agree with the swapped read of `a`.
fn assert_transposed<A: Matrix>(a: &A) {
    let view = a.transpose();
    assert_eq!(view.dimensions(), (a.coldim(), a.rowdim()));
    for i in 0..view.rowdim() {
        for j in 0..view.coldim() {
            assert_eq!(view.entry(i, j), a.entry(j, i));

            let mut x = A::Element::zero();
            let mut y = A::Element::zero();
            assert_eq!(view.get_entry(&mut x, i, j), a.get_entry(&mut y, j, i));
            assert_eq!(x, y);
        }
    }
}

#[test]
fn test_sparse_scenario() {
    init();
    let mut a = sparse_2x3();
    {
        let mut view = TransposeMatrix::new(&mut a);
        assert_eq!(view.rowdim(), 3);
        assert_eq!(view.coldim(), 2);

        let mut x = -7;
        assert!(!view.get_entry(&mut x, 0, 1));
        assert_eq!(x, -7);
        assert!(view.get_entry(&mut x, 2, 1));
        assert_eq!(x, 5);

        view.set_entry(0, 1, 9);
    }
    let mut x = 0;
    assert!(a.get_entry(&mut x, 1, 0));
    assert_eq!(x, 9);
}

#[test]
fn test_categories_swap() {
    let dense = DenseMatrix::<f32>::zeros(2, 2);
    let rows = SparseRowMatrix::<f32>::new(2, 2);
    let cols = SparseColMatrix::<f32>::new(2, 2);
    let coo = CooMatrix::<f32>::new(2, 2);

    assert_eq!(dense.transpose().category(), CategoryKind::RowCol);
    assert_eq!(rows.transpose().category(), CategoryKind::Col);
    assert_eq!(cols.transpose().category(), CategoryKind::Row);
    assert_eq!(coo.transpose().category(), CategoryKind::Generic);

    for kind in [
        CategoryKind::RowCol,
        CategoryKind::Row,
        CategoryKind::Col,
        CategoryKind::Generic,
    ] {
        assert_eq!(kind.transposed().transposed(), kind);
        assert_eq!(kind.transposed().has_rows(), kind.has_cols());
    }
}

#[test]
fn test_capabilities_follow_category() {
    fn rows<M: RowIterableMut>() {}
    fn cols<M: ColIterableMut>() {}
    fn raw<M: RawIterableMut>() {}
    fn category<M: Matrix<Category = C>, C>() {}

    // row-only becomes column-only and back
    cols::<TransposeMatrix<&mut SparseRowMatrix<f64>>>();
    rows::<TransposeMatrix<&mut SparseColMatrix<f64>>>();
    rows::<TransposeMatrix<TransposeMatrix<&mut SparseRowMatrix<f64>>>>();
    category::<TransposeMatrix<&SparseRowMatrix<f64>>, ColMatrixTag>();
    category::<TransposeMatrix<&SparseColMatrix<f64>>, RowMatrixTag>();
    category::<TransposeMatrix<TransposeMatrix<&SparseRowMatrix<f64>>>, RowMatrixTag>();

    // full interfaces stay full
    rows::<TransposeMatrix<&mut DenseMatrix<f64>>>();
    cols::<TransposeMatrix<&mut DenseMatrix<f64>>>();
    category::<TransposeMatrix<&DenseMatrix<f64>>, RowColMatrixTag>();
    rows::<TransposeMatrix<&mut CooMatrix<f64>>>();
    cols::<TransposeMatrix<&mut CooMatrix<f64>>>();
    raw::<TransposeMatrix<&mut CooMatrix<f64>>>();
    category::<TransposeMatrix<&CooMatrix<f64>>, GenericMatrixTag>();
}

#[test]
fn test_read_only_view_is_copy() {
    let a = sparse_2x3();
    let view = a.transpose();
    let copy = view;
    assert_eq!(view.entry(2, 1), copy.entry(2, 1));
    assert!(std::ptr::eq(*view.inner(), &a));
    assert!(std::ptr::eq(copy.into_inner(), &a));
}

#[test]
fn test_view_rows_are_wrapped_cols() {
    init();
    let dense = DenseMatrix::from_fn(3, 4, |i, j| (i * 4 + j) as i32);
    let view = dense.transpose();
    assert_eq!(view.rows().len(), 4);
    for (row, col) in view.rows().zip(dense.cols()) {
        assert!(row.eq(col));
    }
    for (col, row) in view.cols().zip(dense.rows()) {
        assert_eq!(col, row);
    }

    let cols = SparseColMatrix::from_triplets(2, 3, [(1, 0, 4u64), (0, 2, 8)]).unwrap();
    let view = cols.transpose();
    assert!(view.rows().eq(cols.cols()));
    let first: Vec<(usize, u64)> = view
        .rows()
        .next()
        .unwrap()
        .iter()
        .map(|(k, v)| (k, *v))
        .collect();
    assert_eq!(first, vec![(1, 4)]);
}

#[test]
fn test_mutable_traversal_through_view() {
    let mut a = DenseMatrix::from_fn(2, 3, |i, j| (i * 3 + j) as i64);
    {
        let mut view = a.transpose_mut();
        // view row k is column k of `a`
        for (k, row) in view.rows_mut().enumerate() {
            for value in row {
                *value += 100 * k as i64;
            }
        }
        // view column k is row k of `a`
        for col in view.cols_mut() {
            col[0] = -col[0];
        }
    }
    assert_eq!(a.as_slice(), &[0, 101, 202, -3, 104, 205]);

    let mut rows = sparse_2x3();
    {
        let mut view = rows.transpose_mut();
        for mut col in view.cols_mut() {
            col.insert(1, 7);
        }
    }
    assert_eq!(rows.entry(0, 1), Some(7));
    assert_eq!(rows.entry(1, 1), Some(7));
    assert_eq!(rows.nnz(), 4);
}

#[test]
fn test_erase_through_view() {
    let mut sparse = sparse_2x3();
    sparse.transpose_mut().erase_entry(2, 1);
    assert_eq!(sparse.entry(1, 2), None);
    assert_eq!(sparse.nnz(), 1);

    let mut coo = CooMatrix::from_triplets(2, 3, [(0, 0, 1i32), (1, 2, 5)]).unwrap();
    coo.transpose_mut().erase_entry(2, 1);
    assert_eq!(coo.entry(1, 2), None);

    let mut dense = DenseMatrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    dense.transpose_mut().erase_entry(2, 1);
    assert_eq!(dense.entry(1, 2), Some(6));
}

#[test]
fn test_double_transpose_restores_entries() {
    let mut rng = StdRng::seed_from_u64(7);
    let triplets = random_triplets(&mut rng, 5, 4);
    let a = SparseRowMatrix::from_triplets(5, 4, triplets.iter().copied()).unwrap();

    let once = a.transpose();
    let twice = once.transpose();
    assert_eq!(twice.category(), a.category());
    assert_eq!(twice.dimensions(), a.dimensions());
    for i in 0..5 {
        for j in 0..4 {
            assert_eq!(twice.entry(i, j), a.entry(i, j));
        }
    }
    assert!(twice.rows().eq(a.rows()));
}

#[test]
fn test_randomized_reads_and_writes() {
    init();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let nrows = rng.gen_range(1..8);
        let ncols = rng.gen_range(1..8);
        let triplets = random_triplets(&mut rng, nrows, ncols);

        let mut dense = DenseMatrix::zeros(nrows, ncols);
        for &(i, j, v) in &triplets {
            dense.set_entry(i, j, v);
        }
        let mut rows = SparseRowMatrix::from_triplets(nrows, ncols, triplets.clone()).unwrap();
        let mut cols = SparseColMatrix::from_triplets(nrows, ncols, triplets.clone()).unwrap();
        let mut coo = CooMatrix::from_triplets(nrows, ncols, triplets).unwrap();

        assert_transposed(&dense);
        assert_transposed(&rows);
        assert_transposed(&cols);
        assert_transposed(&coo);

        let i = rng.gen_range(0..ncols);
        let j = rng.gen_range(0..nrows);
        let v: f64 = rng.gen_range(-1.0..1.0);
        dense.transpose_mut().set_entry(i, j, v);
        rows.transpose_mut().set_entry(i, j, v);
        cols.transpose_mut().set_entry(i, j, v);
        coo.transpose_mut().set_entry(i, j, v);
        assert_eq!(dense.entry(j, i), Some(v));
        assert_eq!(rows.entry(j, i), Some(v));
        assert_eq!(cols.entry(j, i), Some(v));
        assert_eq!(coo.entry(j, i), Some(v));
    }
}

#[test]
fn test_raw_passthrough_and_entries_frame() {
    let a = CooMatrix::from_triplets(2, 3, [(0, 2, 3u32), (1, 0, 4)]).unwrap();
    let view = a.transpose();
    assert!(view.raw().eq(a.raw()));

    let wrapped: Vec<_> = view.raw_indexed().map(|e| e.copied()).collect();
    assert_eq!(
        wrapped,
        vec![IndexedEntry::new(0, 2, 3), IndexedEntry::new(1, 0, 4)]
    );

    let own: Vec<_> = view.entries().map(|e| e.copied()).collect();
    assert_eq!(
        own,
        vec![IndexedEntry::new(2, 0, 3), IndexedEntry::new(0, 1, 4)]
    );
    for entry in view.entries() {
        assert_eq!(view.entry(entry.row, entry.col), Some(*entry.value));
    }
}

#[test]
fn test_raw_mut_through_view() {
    let mut a = SparseColMatrix::from_triplets(3, 3, [(0, 1, 2i32), (2, 2, 3)]).unwrap();
    {
        let mut view = a.transpose_mut();
        for value in view.raw_mut() {
            *value *= 10;
        }
        for entry in view.raw_indexed_mut() {
            *entry.value += entry.row as i32;
        }
    }
    assert_eq!(a.entry(0, 1), Some(20));
    assert_eq!(a.entry(2, 2), Some(32));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_invalid_index_propagates_from_wrapped() {
    let a = sparse_2x3();
    // view is 3x2; (0, 2) maps to wrapped (2, 0)
    a.transpose().entry(0, 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trips() {
    let dense = DenseMatrix::from_vec(2, 2, vec![1.5f64, 0.0, -2.0, 4.0]).unwrap();
    let json = serde_json::to_string(&dense).unwrap();
    let back: DenseMatrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dense);

    let rows = sparse_2x3();
    let json = serde_json::to_string(&rows).unwrap();
    let back: SparseRowMatrix<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rows);
    assert_eq!(back.transpose().entry(2, 1), Some(5));

    let coo = CooMatrix::from_triplets(3, 1, [(2, 0, 9u32)]).unwrap();
    let json = serde_json::to_string(&coo).unwrap();
    let back: CooMatrix<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, coo);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_invalid_matrices() {
    use matview::SparseVector;

    let short = r#"{"nrows":2,"ncols":3,"data":[1,2]}"#;
    assert!(serde_json::from_str::<DenseMatrix<i32>>(short).is_err());

    // indices out of order and lengths that disagree
    let json = r#"{"minor_dim":3,"lines":[{"indices":[2,0,9],"values":[5]},{"indices":[],"values":[]}]}"#;
    assert!(serde_json::from_str::<SparseRowMatrix<i32>>(json).is_err());
    let json = r#"{"indices":[2,0],"values":[5,6]}"#;
    assert!(serde_json::from_str::<SparseVector<i32>>(json).is_err());

    // stored index past the minor dimension
    let json = r#"{"minor_dim":2,"lines":[{"indices":[5],"values":[1]}]}"#;
    assert!(serde_json::from_str::<SparseColMatrix<i32>>(json).is_err());

    let json = r#"{"nrows":2,"ncols":2,"entries":[[0,0,1],[2,0,2]]}"#;
    assert!(serde_json::from_str::<CooMatrix<i32>>(json).is_err());

    // a valid document still loads and reads correctly through a view
    let json = r#"{"minor_dim":3,"lines":[{"indices":[0],"values":[1]},{"indices":[2],"values":[5]}]}"#;
    let a: SparseRowMatrix<i32> = serde_json::from_str(json).unwrap();
    assert_eq!(a.transpose().entry(2, 1), Some(5));
    assert_eq!(a.transpose().entry(0, 1), None);
}
