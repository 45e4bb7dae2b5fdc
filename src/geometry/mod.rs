pub mod vector;

pub use vector::{
    normalize_vector, points_to_vector, radians_to_degrees, round2, sum_vectors, to_physical,
    vector_length, vectors_angle, vectors_differ,
};
