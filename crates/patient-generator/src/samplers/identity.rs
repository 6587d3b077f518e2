//! Cosmetic identity fields: sequential patient id and sampled names.

use rand::Rng;

/// Common Brazilian given names, matching the population the literature
/// parameters were drawn from.
const GIVEN_NAMES: &[&str] = &[
    "Ana", "Antônio", "Beatriz", "Bruno", "Camila", "Carlos", "Eduardo", "Fernanda", "Francisco",
    "Helena", "João", "José", "Juliana", "Larissa", "Lucas", "Luiza", "Marcos", "Maria", "Paulo",
    "Rafael", "Sandra", "Teresa",
];

/// Common Brazilian family names.
const FAMILY_NAMES: &[&str] = &[
    "Almeida", "Alves", "Barbosa", "Carvalho", "Costa", "Ferreira", "Gomes", "Lima", "Martins",
    "Oliveira", "Pereira", "Ribeiro", "Rocha", "Santos", "Silva", "Souza",
];

/// Sequential opaque id: `PAC_0001` for index 0.
pub fn patient_id(index: u64) -> String {
    format!("PAC_{:04}", index + 1)
}

/// Sample a given/family name pair from the fixed pools.
pub fn sample_name<R: Rng>(rng: &mut R) -> (String, String) {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];
    (given.to_string(), family.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_patient_id_is_one_based_and_padded() {
        assert_eq!(patient_id(0), "PAC_0001");
        assert_eq!(patient_id(41), "PAC_0042");
        assert_eq!(patient_id(9999), "PAC_10000");
    }

    #[test]
    fn test_sampled_names_come_from_pools() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let (given, family) = sample_name(&mut rng);
            assert!(GIVEN_NAMES.contains(&given.as_str()));
            assert!(FAMILY_NAMES.contains(&family.as_str()));
        }
    }
}
