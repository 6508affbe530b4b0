use matalg::{
    solve_lower_triangular, solve_upper_triangular, LinalgError, Matrix, SolveMethod, Vector,
};

const TOL: f64 = 1e-10;

fn assert_matrix_near(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64, msg: &str) {
    assert_eq!(a.dim(), b.dim(), "{}: shape mismatch", msg);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert!(
                (a[(i, j)] - b[(i, j)]).abs() < tol,
                "{}: element ({}, {}): {} vs {}",
                msg,
                i,
                j,
                a[(i, j)],
                b[(i, j)]
            );
        }
    }
}

fn residual(a: &Matrix<f64>, x: &Vector<f64>, b: &Vector<f64>) -> f64 {
    let ax = a * x;
    let mut worst = 0.0_f64;
    for i in 0..b.len() {
        worst = worst.max((ax[i] - b[i]).abs());
    }
    worst
}

// ── Determinant and inverse ─────────────────────────────────────────

#[test]
fn known_2x2_det_and_inverse() {
    let a: Matrix<f64> = Matrix::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
    assert!((a.det().unwrap() - 10.0).abs() < TOL);

    let inv = a.inverse().unwrap();
    let expected = Matrix::from_rows(2, 2, &[0.6, -0.7, -0.2, 0.4]);
    assert_matrix_near(&inv, &expected, TOL, "inverse");
    assert_matrix_near(&(&a * &inv), &Matrix::eye(2), TOL, "A * inv(A)");
}

#[test]
fn identity_has_unit_determinant() {
    let i3 = Matrix::<f64>::eye(3);
    assert_eq!(i3.det().unwrap(), 1.0);
}

#[test]
fn exactly_singular_is_rejected() {
    let a = Matrix::from_rows(2, 2, &[1.0, 0.0, 0.0, 0.0]);
    assert_eq!(a.det().unwrap(), 0.0);
    assert_eq!(a.inverse(), Err(LinalgError::Singular));
}

#[test]
fn non_square_shape_errors() {
    let a = Matrix::<f64>::zeros(3, 2);
    assert_eq!(a.det(), Err(LinalgError::NotSquare { rows: 3, cols: 2 }));
    assert_eq!(a.inverse(), Err(LinalgError::NotSquare { rows: 3, cols: 2 }));
}

#[test]
fn inverse_via_lu_determinant_path() {
    // order 6 sends both the determinant and every cofactor through LU
    let a = Matrix::from_fn(6, 6, |i, j| {
        if i == j {
            5.0
        } else {
            1.0 / ((i + 2 * j + 2) as f64)
        }
    });
    let inv = a.inverse().unwrap();
    assert_matrix_near(&(&a * &inv), &Matrix::eye(6), 1e-9, "A * inv(A)");
}

// ── LU ──────────────────────────────────────────────────────────────

#[test]
fn lu_reconstructs_with_interchanges() {
    let a = Matrix::from_rows(3, 3, &[0.0, 2.0, 1.0, 3.0, 1.0, 0.0, 5.0, 4.0, 2.0]);
    let f = a.lu(1e-15);
    assert_matrix_near(&(&f.l * &f.u), &a, TOL, "L * U");
    for i in 0..3 {
        for j in 0..i {
            assert!(f.u[(i, j)].abs() < TOL, "U not triangular at ({}, {})", i, j);
        }
    }
}

#[test]
fn lu_without_interchanges_is_unit_lower() {
    let a = Matrix::from_rows(3, 3, &[4.0, 3.0, 2.0, 2.0, 4.0, 1.0, 1.0, 2.0, 3.0]);
    let f = a.lu(1e-15);
    assert_matrix_near(&(&f.l * &f.u), &a, TOL, "L * U");
    for i in 0..3 {
        assert_eq!(f.l[(i, i)], 1.0);
        for j in (i + 1)..3 {
            assert_eq!(f.l[(i, j)], 0.0);
        }
    }
}

// ── QR and RQ ───────────────────────────────────────────────────────

#[test]
fn qr_factors_behave() {
    let a = Matrix::from_rows(
        3,
        3,
        &[12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0],
    );
    let f = a.qr();
    assert_matrix_near(&(&f.q * &f.r), &a, TOL, "Q * R");
    assert_matrix_near(
        &(&f.q.transpose() * &f.q),
        &Matrix::eye(3),
        TOL,
        "Q^T * Q",
    );
    for i in 0..3 {
        for j in 0..i {
            assert_eq!(f.r[(i, j)], 0.0);
        }
    }
}

#[test]
fn qr_rank_deficiency_degrades_quietly() {
    let a = Matrix::from_rows(3, 2, &[1.0, 0.0, 2.0, 0.0, -1.0, 0.0]);
    let f = a.qr();
    assert_eq!(f.r[(1, 1)], 0.0);
    assert_matrix_near(&(&f.q * &f.r), &a, TOL, "Q * R");
}

#[test]
fn rq_factors_behave() {
    let a = Matrix::from_rows(3, 3, &[4.0, 1.0, -2.0, 2.0, 5.0, 1.0, 0.0, 3.0, 6.0]);
    let f = a.rq().unwrap();
    assert_matrix_near(&(&f.r * &f.q), &a, TOL, "R * Q");
    assert_matrix_near(
        &(&f.q * &f.q.transpose()),
        &Matrix::eye(3),
        TOL,
        "Q * Q^T",
    );
    for i in 0..3 {
        for j in 0..i {
            assert!(f.r[(i, j)].abs() < TOL);
        }
    }
    assert!(matches!(
        Matrix::<f64>::zeros(2, 3).rq(),
        Err(LinalgError::NotSquare { .. })
    ));
}

// ── Solvers ─────────────────────────────────────────────────────────

#[test]
fn triangular_solvers_hand_checked() {
    let u: Matrix<f64> = Matrix::from_rows(2, 2, &[2.0, 1.0, 0.0, 3.0]);
    let x = solve_upper_triangular(&u, &Vector::from_slice(&[7.0, 9.0])).unwrap();
    assert!((x[0] - 2.0).abs() < TOL);
    assert!((x[1] - 3.0).abs() < TOL);

    let l: Matrix<f64> = Matrix::from_rows(2, 2, &[2.0, 0.0, 1.0, 3.0]);
    let x = solve_lower_triangular(&l, &Vector::from_slice(&[4.0, 11.0])).unwrap();
    assert!((x[0] - 2.0).abs() < TOL);
    assert!((x[1] - 3.0).abs() < TOL);
}

#[test]
fn every_method_solves_the_same_system() {
    let a = Matrix::from_rows(3, 3, &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]);
    let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
    for method in ["lu", "qr", "svd", "inv"] {
        let method: SolveMethod = method.parse().unwrap();
        let x = a.solve(&b, method, 1e-15).unwrap();
        assert!(
            residual(&a, &x, &b) < 1e-8,
            "{} residual too large",
            method
        );
        assert!((x[0] - 2.0).abs() < 1e-8);
        assert!((x[1] - 3.0).abs() < 1e-8);
        assert!((x[2] + 1.0).abs() < 1e-8);
    }
}

#[test]
fn unknown_method_is_rejected() {
    assert_eq!(
        "cholesky".parse::<SolveMethod>(),
        Err(LinalgError::UnknownMethod)
    );
}

#[test]
fn solve_shape_errors() {
    let a = Matrix::<f64>::eye(3);
    let short = Vector::<f64>::zeros(2);
    assert_eq!(
        a.solve(&short, SolveMethod::Lu, 1e-15),
        Err(LinalgError::DimensionMismatch {
            expected: 3,
            got: 2
        })
    );
    let rect = Matrix::<f64>::zeros(2, 3);
    assert_eq!(
        rect.solve(&short, SolveMethod::Qr, 1e-15),
        Err(LinalgError::NotSquare { rows: 2, cols: 3 })
    );
}

// ── Symmetric eigen ─────────────────────────────────────────────────

#[test]
fn identity_eigenpairs() {
    let e = Matrix::<f64>::eye(3).eig_symmetric().unwrap();
    assert_eq!(e.eigenvalues, vec![1.0, 1.0, 1.0]);
    assert_eq!(e.eigenvectors, Matrix::eye(3));
}

#[test]
fn diagonal_eigen_sorted_descending() {
    let a = Matrix::from_rows(2, 2, &[2.0, 0.0, 0.0, 3.0]);
    let e = a.eig_symmetric().unwrap();
    assert_eq!(e.eigenvalues, vec![3.0, 2.0]);
    assert_eq!(e.eigenvectors.col(0).as_slice(), &[0.0, 1.0]);
    assert_eq!(e.eigenvectors.col(1).as_slice(), &[1.0, 0.0]);
}

#[test]
fn eigen_decomposition_reconstructs() {
    let a = Matrix::from_rows(
        4,
        4,
        &[
            4.0, 1.0, 0.0, 2.0, 1.0, 5.0, 1.0, 0.0, 0.0, 1.0, 6.0, 1.0, 2.0, 0.0, 1.0, 7.0,
        ],
    );
    let e = a.eig_symmetric().unwrap();
    let lambda = Matrix::from_fn(4, 4, |i, j| if i == j { e.eigenvalues[i] } else { 0.0 });
    let back = &(&e.eigenvectors * &lambda) * &e.eigenvectors.transpose();
    assert_matrix_near(&back, &a, 1e-8, "V * diag(lambda) * V^T");
}

// ── SVD and pseudo-inverse ──────────────────────────────────────────

#[test]
fn svd_reconstructs_all_shapes() {
    let cases = [
        Matrix::from_rows(3, 3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]),
        Matrix::from_rows(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 7.0]),
        Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 7.0]),
    ];
    for a in &cases {
        let f = a.svd();
        let k = f.s.len();
        assert_eq!(k, a.nrows().min(a.ncols()));
        let sigma = Matrix::from_fn(k, k, |i, j| if i == j { f.s[i] } else { 0.0 });
        let back = &(&f.u * &sigma) * &f.v.transpose();
        assert_matrix_near(&back, a, 1e-8, "U * S * V^T");
        for j in 1..k {
            assert!(f.s[j - 1] >= f.s[j], "singular values out of order");
        }
    }
}

#[test]
fn pinv_satisfies_penrose_identity() {
    let tall = Matrix::from_rows(3, 2, &[2.0, -1.0, 1.0, 3.0, 0.0, 1.0]);
    for use_svd in [false, true] {
        let p = tall.pinv(use_svd, 1e-12).unwrap();
        let back = &(&tall * &p) * &tall;
        assert_matrix_near(&back, &tall, 1e-8, "A * pinv(A) * A");
    }

    // the SVD route also covers rank-deficient input
    let deficient = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    let p = deficient.pinv(true, 1e-12).unwrap();
    let back = &(&deficient * &p) * &deficient;
    assert_matrix_near(&back, &deficient, 1e-8, "rank-1 A * pinv(A) * A");

    // while the QR route reports the exact singularity
    assert_eq!(
        Matrix::from_rows(2, 2, &[1.0, 0.0, 0.0, 0.0]).pinv(false, 1e-12),
        Err(LinalgError::Singular)
    );
}

// ── Text round-trip ─────────────────────────────────────────────────

#[test]
fn display_parse_round_trip() {
    let ints = Matrix::from_rows(2, 3, &[1, -2, 30, 4, 5, -6]);
    let back: Matrix<i32> = ints.to_string().parse().unwrap();
    assert_eq!(back, ints);

    let floats = Matrix::from_rows(2, 2, &[1.5, -0.125, 2.0e-3, 40.0]);
    let back: Matrix<f64> = floats.to_string().parse().unwrap();
    assert_eq!(back, floats);
}

#[test]
fn parser_tolerates_loose_delimiters() {
    let bare: Matrix<f64> = "1 2\n3 4".parse().unwrap();
    let piped: Matrix<f64> = "| 1 2 |\n| 3 4 |".parse().unwrap();
    let glued: Matrix<f64> = "|1 2|\n|3 4|".parse().unwrap();
    assert_eq!(bare, piped);
    assert_eq!(bare, glued);
}
