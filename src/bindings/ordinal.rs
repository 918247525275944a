//! # OrdinalCdfLoss 를 위한 Python 바인딩
//!
//! 이 모듈은 `pyo3`를 사용하여 Rust로 구현된 손실 레이어를 Python에서
//! 직접 사용할 수 있는 클래스로 노출합니다. 라벨은 numpy 의 int64 로
//! 받고, 음수 라벨은 코어에 닿기 전에 거부합니다.

use ndarray::Array1;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::LossError;
use crate::layers::ordinal::{GradientMode, OrdinalCdfLoss};

impl From<LossError> for PyErr {
    fn from(err: LossError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pyclass(name = "OrdinalCdfLoss", module = "ordinal_stone._rust")]
pub struct PyOrdinalCdfLoss {
    inner: OrdinalCdfLoss<f32>,
}

#[pymethods]
impl PyOrdinalCdfLoss {
    #[new]
    #[pyo3(signature = (bin_count, adjoint=false))]
    fn new(bin_count: usize, adjoint: bool) -> Self {
        let mode = if adjoint {
            GradientMode::PrefixAdjoint
        } else {
            GradientMode::PassThrough
        };
        PyOrdinalCdfLoss {
            inner: OrdinalCdfLoss::with_gradient_mode(bin_count, mode),
        }
    }

    /// 순전파: 스칼라 손실을 반환합니다.
    fn forward(
        &mut self,
        raw: PyReadonlyArray2<f32>,
        labels: PyReadonlyArray1<i64>,
    ) -> PyResult<f32> {
        let raw_arr = raw.as_array();
        let label_view = labels.as_array();

        let mut converted = Vec::with_capacity(label_view.len());
        for &value in label_view.iter() {
            if value < 0 {
                return Err(PyValueError::new_err(format!(
                    "label {} must be non-negative",
                    value
                )));
            }
            converted.push(value as usize);
        }
        let label_arr = Array1::from(converted);

        Ok(self.inner.forward(&raw_arr, &label_arr.view())?)
    }

    /// 역전파: 그래디언트 배열을 반환합니다.
    #[pyo3(signature = (upstream, needs_gradient=true))]
    fn backward<'py>(
        &self,
        py: Python<'py>,
        upstream: f32,
        needs_gradient: bool,
    ) -> PyResult<&'py PyArray2<f32>> {
        let grad = self.inner.backward(upstream, needs_gradient)?;
        Ok(grad.into_pyarray(py))
    }

    pub fn bin_count(&self) -> usize {
        self.inner.bin_count()
    }

    pub fn batch_size(&self) -> Option<usize> {
        self.inner.batch_size()
    }
}
