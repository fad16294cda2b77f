/// Position of a [`super::CandidateIterator`] inside the current ordering
#[derive(Debug, Clone)]
pub struct CandidateState {
    pub(crate) permutation: Option<Vec<usize>>,
    pub(crate) shape_idx: usize,
    pub(crate) tuple_idx: usize,
}

impl CandidateState {
    pub fn new() -> Self {
        Self {
            permutation: None,
            shape_idx: 0,
            tuple_idx: 0,
        }
    }

    pub fn start(&mut self, permutation: Vec<usize>) {
        self.permutation = Some(permutation);
        self.shape_idx = 0;
        self.tuple_idx = 0;
    }

    pub fn next_shape(&mut self) {
        self.shape_idx += 1;
        self.tuple_idx = 0;
    }

    pub fn advance(&mut self) {
        self.tuple_idx += 1;
    }

    pub fn finish_permutation(&mut self) {
        self.permutation = None;
    }
}

impl Default for CandidateState {
    fn default() -> Self {
        Self::new()
    }
}
