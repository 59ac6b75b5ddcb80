use crate::particle::{conjunction_at, match_chain, starts_with_joined_particle};
use crate::token::NameToken;

/// Index of the token where the family name starts.
///
/// The first token always belongs to the given name, so for two or more
/// tokens the result is between 1 and `tokens.len() - 1`.
pub fn split_index(tokens: &[NameToken], trust_case: bool) -> usize {
    let n = tokens.len();
    if n < 2 {
        return 0;
    }

    for i in 1..n {
        if match_chain(tokens, i, trust_case).is_some()
            || starts_with_joined_particle(&tokens[i], trust_case)
        {
            return i;
        }

        if i >= 2 && conjunction_at(tokens, i, trust_case) {
            // Iberian double surname ("Romero y Galdámez"): the family
            // started one word earlier
            return i - 1;
        }
    }

    n - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::is_mixed_case;
    use crate::token::tokenize;

    fn index(name: &str) -> usize {
        split_index(&tokenize(name), is_mixed_case(name))
    }

    #[test]
    fn one_word() {
        assert_eq!(0, index("Doe"));
        assert_eq!(0, index(""));
    }

    #[test]
    fn two_words() {
        assert_eq!(1, index("Jane Doe"));
    }

    #[test]
    fn three_words() {
        assert_eq!(2, index("Jane Emily Doe"));
    }

    #[test]
    fn conjunction_after_one() {
        assert_eq!(2, index("Rodrigo y Velazquez"));
    }

    #[test]
    fn conjunction_after_two() {
        assert_eq!(1, index("Jane Rodrigo y Velazquez"));
        assert_eq!(1, index("Eduardo Dato e Iradier"));
    }

    #[test]
    fn initial_is_not_conjunction() {
        assert_eq!(3, index("MARY ANN E SMITH"));
        assert_eq!(3, index("Mary Ann E Smith"));
        assert_eq!(3, index("john q e public"));
        assert_eq!(3, index("John Q. e Public"));
        assert_eq!(3, index("JORDI VIDAL I BARRAQUER"));
        assert_eq!(1, index("EDUARDO DATO E IRADIER"));
        assert_eq!(1, index("JOSÉ ROMERO Y GALDÁMEZ"));
    }

    #[test]
    fn trailing_conjunction() {
        assert_eq!(2, index("Jane Rodrigo y"));
    }

    #[test]
    fn particle_after_one() {
        assert_eq!(1, index("Abd al-Qader"));
        assert_eq!(1, index("Jane Abd al-Qader"));
    }

    #[test]
    fn particle_and_conjunction() {
        assert_eq!(1, index("Alejandro de Aza y Cabra"));
    }

    #[test]
    fn conjunction_and_particle() {
        assert_eq!(1, index("Alejandro Cabra y de Aza"));
    }

    #[test]
    fn chains() {
        assert_eq!(1, index("Bram van Haag"));
        assert_eq!(2, index("Ludwig Mies van der Rohe"));
        assert_eq!(1, index("Máire Bean Uí Bhriain"));
        assert_eq!(1, index("Kiri Te Kanawa"));
    }

    #[test]
    fn capitalized_lookalikes() {
        assert_eq!(1, index("Van Morrison"));
        assert_eq!(2, index("Robert De Niro"));
        assert_eq!(2, index("Dick Van Dyke"));
    }

    #[test]
    fn single_case_input() {
        assert_eq!(1, index("BRAM VAN HAAG"));
        assert_eq!(1, index("ROBERT DE NIRO"));
        assert_eq!(1, index("mary o'brian smith"));
        assert_eq!(2, index("mary ann mcadam"));
    }

    #[test]
    fn mc_with_trusted_case() {
        assert_eq!(1, index("Shaun McAdam"));
        assert_eq!(2, index("Mary Ann McAdam"));
    }

    #[test]
    fn particle_with_nothing_after() {
        assert_eq!(1, index("Jan van"));
    }
}
