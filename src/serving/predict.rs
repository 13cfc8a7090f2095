use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::serving::labels::LabelMap;
use crate::types::IndexOrigin;

/// A single class hypothesis returned by a model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class_id: i64,
    pub score: f32,
}

/// All hypotheses for one image, in the order the service returned them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagePredictions {
    pub predictions: Vec<Prediction>,
}

/// A prediction joined with its label text, when the table has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPrediction {
    pub class_id: i64,
    pub score: f32,
    pub label: Option<String>,
}

impl ImagePredictions {
    /// First hypothesis; the best one for services that sort their output.
    pub fn top(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    /// Joins every prediction with the label table under an explicit origin.
    pub fn resolve(&self, labels: &LabelMap, origin: IndexOrigin) -> Vec<LabeledPrediction> {
        self.predictions
            .iter()
            .map(|prediction| LabeledPrediction {
                class_id: prediction.class_id,
                score: prediction.score,
                label: labels.get(prediction.class_id, origin).map(str::to_string),
            })
            .collect()
    }
}

/// Classification backend fed with encoded JPEG buffers. Implementations own
/// transport, serialization, and authentication; they return one
/// `ImagePredictions` per input buffer, in input order.
pub trait PredictionService {
    fn predict(&self, batch: &[Vec<u8>]) -> Result<Vec<ImagePredictions>>;
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use super::*;

    struct CannedService {
        responses: Vec<ImagePredictions>,
    }

    impl PredictionService for CannedService {
        fn predict(&self, batch: &[Vec<u8>]) -> Result<Vec<ImagePredictions>> {
            assert_eq!(batch.len(), self.responses.len());
            Ok(self.responses.clone())
        }
    }

    fn labels() -> LabelMap {
        let text = "0: 'tench',\n1: 'goldfish',\n2: 'white shark'\n";
        LabelMap::from_reader(Cursor::new(text.as_bytes()), &PathBuf::from("labels.txt"))
            .unwrap()
    }

    #[test]
    fn one_response_per_buffer_in_order() {
        let service = CannedService {
            responses: vec![
                ImagePredictions {
                    predictions: vec![Prediction {
                        class_id: 2,
                        score: 0.9,
                    }],
                },
                ImagePredictions {
                    predictions: vec![Prediction {
                        class_id: 0,
                        score: 0.5,
                    }],
                },
            ],
        };

        let results = service.predict(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].top().map(|p| p.class_id), Some(2));
        assert_eq!(results[1].top().map(|p| p.class_id), Some(0));
    }

    #[test]
    fn resolve_honors_the_index_origin() {
        let predictions = ImagePredictions {
            predictions: vec![
                Prediction {
                    class_id: 1,
                    score: 0.8,
                },
                Prediction {
                    class_id: 2,
                    score: 0.1,
                },
            ],
        };
        let labels = labels();

        let zero = predictions.resolve(&labels, IndexOrigin::ZeroBased);
        assert_eq!(zero[0].label.as_deref(), Some("goldfish"));
        assert_eq!(zero[1].label.as_deref(), Some("white shark"));

        let one = predictions.resolve(&labels, IndexOrigin::OneBased);
        assert_eq!(one[0].label.as_deref(), Some("tench"));
        assert_eq!(one[1].label.as_deref(), Some("goldfish"));
    }

    #[test]
    fn ids_without_labels_resolve_to_none() {
        let predictions = ImagePredictions {
            predictions: vec![Prediction {
                class_id: 40,
                score: 0.3,
            }],
        };
        let resolved = predictions.resolve(&labels(), IndexOrigin::ZeroBased);
        assert_eq!(resolved[0].label, None);
        assert_eq!(resolved[0].class_id, 40);
    }
}
