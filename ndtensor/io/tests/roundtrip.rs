//! File-level round-trip tests for the flat-text tensor codec.

use ndtensor_core::Tensor;
use ndtensor_io::{read_tensor, write_tensor, TensorIoError};
use tempfile::tempdir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn roundtrip_preserves_shape_and_elements() -> anyhow::Result<()> {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("tensor.txt");

    let data: Vec<f64> = (0..24).map(|i| i as f64 * 0.5).collect();
    let original = Tensor::from_vec(data, [2, 3, 4])?;

    write_tensor(&original, &path)?;
    let restored: Tensor<f64> = read_tensor(&path)?;

    assert_eq!(restored, original);
    // equality already covers elements; assert the buffer explicitly so a
    // codec bug cannot hide behind a future equality change
    assert_eq!(restored.as_slice(), original.as_slice());
    assert_eq!(restored.shape(), original.shape());
    Ok(())
}

#[test]
fn roundtrip_integer_tensor() -> anyhow::Result<()> {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("ints.txt");

    let original = Tensor::from_vec(vec![-3i64, 0, 7, 2], [2, 2])?;
    write_tensor(&original, &path)?;
    let restored: Tensor<i64> = read_tensor(&path)?;

    assert_eq!(restored.as_slice(), original.as_slice());
    Ok(())
}

#[test]
fn known_file_layout() -> anyhow::Result<()> {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("vec.txt");
    std::fs::write(&path, "1\n3\n1 2 3\n")?;

    let t: Tensor<i32> = read_tensor(&path)?;
    assert_eq!(t.shape(), &[3]);
    assert_eq!(*t.get(&[0])?, 1);
    assert_eq!(*t.get(&[1])?, 2);
    assert_eq!(*t.get(&[2])?, 3);
    Ok(())
}

#[test]
fn truncated_file_is_an_error() -> anyhow::Result<()> {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("short.txt");
    // declares 3 elements, provides 2
    std::fs::write(&path, "1\n3\n1 2\n")?;

    let err = read_tensor::<i32, _>(&path).unwrap_err();
    assert!(matches!(
        err,
        TensorIoError::Truncated {
            section: "element",
            expected: 3,
            found: 2,
        }
    ));
    Ok(())
}

#[test]
fn garbage_file_is_an_error() -> anyhow::Result<()> {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("garbage.txt");
    std::fs::write(&path, "not a tensor file")?;

    let err = read_tensor::<f32, _>(&path).unwrap_err();
    assert!(matches!(err, TensorIoError::InvalidToken { .. }));
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    init_logging();
    let err = read_tensor::<f32, _>("/nonexistent/tensor.txt").unwrap_err();
    assert!(matches!(err, TensorIoError::Io(_)));
}

#[test]
fn unwritable_path_is_an_io_error() {
    init_logging();
    let t = Tensor::<i32>::zeros([2]);
    let err = write_tensor(&t, "/nonexistent/dir/tensor.txt").unwrap_err();
    assert!(matches!(err, TensorIoError::Io(_)));
}
