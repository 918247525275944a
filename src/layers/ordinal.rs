//! # 서열 회귀용 누적 프로파일 손실 레이어
//!
//! 모델의 빈별 원시 출력을 왼쪽→오른쪽 누적합으로 변환한 뒤, 정수
//! 서열 라벨에서 유도한 0/1 계단 목표와의 평균 제곱 오차를 계산합니다.
//! 순전파에서 만든 차분 버퍼는 같은 사이클의 역전파가 그대로 재사용
//! 합니다.

use log::debug;
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut2, Zip};
use num_traits::Float;

use crate::error::{LossError, Result};
use crate::ops::{batch, scan, step};

/// 역전파 그래디언트 계산 방식 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientMode {
    /// 순전파에서 저장한 차분을 `upstream / N` 으로 스케일해 그대로 복사
    PassThrough,
    /// 같은 스케일의 차분에 누적합 연산의 수반(우측 누적합)을 적용
    PrefixAdjoint,
}

/// 서열 라벨을 계단 목표와 비교하는 손실 레이어입니다.
///
/// 이 구조체는 계단 목표, 누적 프로파일, 차분의 세 작업 버퍼를 소유하며
/// 배치 형태가 바뀔 때만 재할당합니다. 순전파와 역전파는 한 쌍의
/// 트랜잭션입니다: 역전파는 직전 순전파가 남긴 차분 버퍼만 읽습니다.
/// 배치를 병렬로 처리하려면 인스턴스를 배치마다 하나씩 두어야 합니다.
pub struct OrdinalCdfLoss<F = f32> {
    bin_count: usize,
    mode: GradientMode,
    targets: Array2<F>,
    profile: Array2<F>,
    diff: Array2<F>,
    ready: bool,
}

impl<F: Float + Send + Sync> OrdinalCdfLoss<F> {
    /// 새로운 손실 레이어를 생성합니다. 그래디언트 방식은
    /// [`GradientMode::PassThrough`] 입니다.
    ///
    /// # 인자
    /// * `bin_count` - 서열 빈의 수 `K`. 1 이상이어야 합니다.
    pub fn new(bin_count: usize) -> Self {
        Self::with_gradient_mode(bin_count, GradientMode::PassThrough)
    }

    /// 그래디언트 방식을 지정해 손실 레이어를 생성합니다.
    pub fn with_gradient_mode(bin_count: usize, mode: GradientMode) -> Self {
        assert!(bin_count > 0, "빈 개수는 1 이상이어야 합니다.");
        Self {
            bin_count,
            mode,
            targets: Array2::zeros((0, bin_count)),
            profile: Array2::zeros((0, bin_count)),
            diff: Array2::zeros((0, bin_count)),
            ready: false,
        }
    }

    /// 순전파: 배치 손실을 계산합니다.
    ///
    /// 샘플마다 라벨에서 계단 목표를 만들고, 원시 출력의 누적합으로
    /// 프로파일을 만든 뒤, 둘의 차분을 버퍼에 남깁니다. 손실은 차분
    /// 제곱의 총합을 `N * K` 로 나눈 값입니다.
    ///
    /// 모든 검증은 버퍼를 건드리기 전에 끝나므로, 오류가 난 호출은
    /// 진행 중이던 사이클을 남기지 않습니다.
    ///
    /// # 인자
    /// * `raw` - `[N, K]` 형태의 원시 출력 텐서.
    /// * `labels` - 샘플당 하나, `[0, K]` 범위의 서열 라벨.
    ///
    /// # 반환
    /// 스칼라 손실. 항상 0 이상이며, 프로파일이 목표와 정확히 일치할
    /// 때만 0 입니다.
    pub fn forward(&mut self, raw: &ArrayView2<'_, F>, labels: &ArrayView1<'_, usize>) -> Result<F> {
        self.ready = false;

        let (n, k) = raw.dim();
        if k != self.bin_count {
            return Err(LossError::ShapeMismatch {
                what: "raw output columns",
                got: k,
                expected: self.bin_count,
            });
        }
        if labels.len() != n {
            return Err(LossError::ShapeMismatch {
                what: "labels",
                got: labels.len(),
                expected: n,
            });
        }
        if n == 0 {
            return Err(LossError::EmptyBatch);
        }
        for (sample, &label) in labels.iter().enumerate() {
            if label > k {
                return Err(LossError::LabelOutOfRange {
                    sample,
                    label,
                    bin_count: k,
                });
            }
        }

        self.reshape(n);

        // 샘플 행은 서로 독립이므로 행 단위로 병렬 처리한다.
        Zip::from(raw.rows())
            .and(self.targets.rows_mut())
            .and(self.profile.rows_mut())
            .and(self.diff.rows_mut())
            .and(labels)
            .par_for_each(|raw_row, mut tgt, mut prof, mut dif, &label| {
                step::fill_step_row(tgt.view_mut(), label);
                scan::prefix_sum_row(raw_row, prof.view_mut());
                for j in 0..k {
                    dif[j] = prof[j] - tgt[j];
                }
            });

        let dot = batch::dot_flat(&self.diff.view(), &self.diff.view());
        let loss = dot / (F::from(n).unwrap() * F::from(k).unwrap());
        self.ready = true;
        Ok(loss)
    }

    /// 역전파: 그래디언트를 새 배열로 반환합니다.
    ///
    /// `needs_gradient` 가 false 면 계산을 건너뛰고 0 배열을 반환합니다.
    ///
    /// # 인자
    /// * `upstream` - 손실값에 대한 상류 그래디언트 (보통 1).
    /// * `needs_gradient` - 원시 출력 그래디언트가 실제로 필요한지 여부.
    ///
    /// # 반환
    /// `[N, K]` 형태의 그래디언트 텐서.
    pub fn backward(&self, upstream: F, needs_gradient: bool) -> Result<Array2<F>> {
        if !self.ready {
            return Err(LossError::MissingForward);
        }
        let mut grad = Array2::zeros(self.diff.raw_dim());
        self.backward_into(upstream, needs_gradient, grad.view_mut())?;
        Ok(grad)
    }

    /// 역전파: 호출자가 소유한 버퍼에 그래디언트를 채웁니다.
    ///
    /// `needs_gradient` 가 false 면 `grad` 에 아무것도 쓰지 않습니다.
    /// 그 외에는 순수 덮어쓰기입니다: 다른 그래디언트 기여는 더해지지
    /// 않습니다.
    pub fn backward_into(
        &self,
        upstream: F,
        needs_gradient: bool,
        mut grad: ArrayViewMut2<'_, F>,
    ) -> Result<()> {
        if !self.ready {
            return Err(LossError::MissingForward);
        }
        if grad.dim() != self.diff.dim() {
            return Err(LossError::ShapeMismatch {
                what: "gradient buffer",
                got: grad.len(),
                expected: self.diff.len(),
            });
        }
        if !needs_gradient {
            return Ok(());
        }

        let alpha = upstream / F::from(self.diff.nrows()).unwrap();
        match self.mode {
            GradientMode::PassThrough => {
                batch::scaled_assign(alpha, &self.diff.view(), &mut grad);
            }
            GradientMode::PrefixAdjoint => {
                Zip::from(self.diff.rows())
                    .and(grad.rows_mut())
                    .par_for_each(|dif, mut g| {
                        scan::suffix_sum_row(dif, g.view_mut());
                        g.mapv_inplace(|v| v * alpha);
                    });
            }
        }
        Ok(())
    }

    // Getter 메서드들 (호스트 루프와 바인딩용)
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    pub fn gradient_mode(&self) -> GradientMode {
        self.mode
    }

    /// 직전 순전파의 배치 크기. 순전파 전에는 `None`.
    pub fn batch_size(&self) -> Option<usize> {
        self.ready.then(|| self.diff.nrows())
    }

    /// 직전 순전파가 남긴 차분 버퍼의 뷰. 순전파 전에는 `None`.
    pub fn difference(&self) -> Option<ArrayView2<'_, F>> {
        self.ready.then(|| self.diff.view())
    }

    fn reshape(&mut self, batch: usize) {
        if self.diff.nrows() == batch {
            return;
        }
        debug!("resizing loss buffers to {} x {}", batch, self.bin_count);
        self.targets = Array2::zeros((batch, self.bin_count));
        self.profile = Array2::zeros((batch, self.bin_count));
        self.diff = Array2::zeros((batch, self.bin_count));
    }
}
