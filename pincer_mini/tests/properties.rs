use pincer_mini::arrays::*;
use pincer_mini::strings::*;
use rand::{seq::SliceRandom, Rng};

const ROUNDS: usize = 200;

fn random_nums(max_len: usize, range: std::ops::RangeInclusive<i32>) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

fn random_text(max_len: usize, alphabet: &[char]) -> Vec<char> {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| *alphabet.choose(&mut rng).unwrap_or(&'a'))
        .collect()
}

mod strings {
    use super::*;

    #[test]
    fn palindrome_is_symmetric_under_reversal() {
        let alphabet = ['a', 'A', 'b', 'B', '1', ' ', ',', '!', 'é'];
        for _ in 0..ROUNDS {
            let text = random_text(12, &alphabet);
            let forward = text.iter().collect::<String>();
            let backward = text.iter().rev().collect::<String>();
            assert_eq!(is_palindrome(&forward), is_palindrome(&backward), "{forward:?}");
        }
    }

    #[test]
    fn mirrored_text_is_a_palindrome() {
        let alphabet = ['x', 'Y', '7', '-', ' '];
        for _ in 0..ROUNDS {
            let half = random_text(20, &alphabet);
            let text = half.iter().chain(half.iter().rev()).collect::<String>();
            assert!(text.is_palindrome(), "{text:?}");
        }
    }

    #[test]
    fn palindrome_matches_filtered_comparison() {
        let alphabet = ['a', 'B', 'b', ':', ' '];
        for _ in 0..ROUNDS {
            let text = random_text(10, &alphabet).into_iter().collect::<String>();
            let cleaned = text
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<Vec<_>>();
            let expected = cleaned.iter().eq(cleaned.iter().rev());
            assert_eq!(is_palindrome(&text), expected, "{text:?}");
        }
    }

    #[test]
    fn reverse_twice_is_identity() {
        for _ in 0..ROUNDS {
            let original = random_nums(50, -100..=100);
            let mut slice = original.clone();

            reverse_string(&mut slice);
            assert_eq!(slice, original.iter().rev().copied().collect::<Vec<_>>());

            reverse_string(&mut slice);
            assert_eq!(slice, original);
        }
    }

    #[test]
    fn compress_round_trips_and_never_grows() {
        let alphabet = ['a', 'b', 'c'];
        for _ in 0..ROUNDS {
            // Long runs of few letters so that multi digit counts show up.
            let mut rng = rand::thread_rng();
            let mut original = Vec::new();
            for _ in 0..rng.gen_range(0..6) {
                let c = *alphabet.choose(&mut rng).unwrap_or(&'a');
                original.extend(std::iter::repeat(c).take(rng.gen_range(1..=120)));
            }

            let mut chars = original.clone();
            let len = compress(&mut chars);
            assert!(len <= original.len());
            assert_eq!(expand(&chars[..len]), original);
        }
    }
}

mod arrays {
    use super::*;

    #[test]
    fn remove_element_keeps_everything_else_in_order() {
        for _ in 0..ROUNDS {
            let original = random_nums(40, 0..=5);
            let val = rand::thread_rng().gen_range(0..=5);

            let mut nums = original.clone();
            let k = remove_element(&mut nums, &val);

            let expected = original
                .iter()
                .copied()
                .filter(|&n| n != val)
                .collect::<Vec<_>>();
            assert_eq!(k, expected.len());
            assert_eq!(nums[..k], expected[..]);
        }
    }

    #[test]
    fn remove_duplicates_leaves_strictly_increasing_prefix() {
        for _ in 0..ROUNDS {
            let mut original = random_nums(40, -10..=10);
            original.sort_unstable();

            let mut nums = original.clone();
            let k = remove_duplicates(&mut nums);

            let mut expected = original.clone();
            expected.dedup();
            assert_eq!(nums[..k], expected[..]);
            assert!(nums[..k].windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn sorted_squares_is_sorted_permutation_of_squares() {
        for _ in 0..ROUNDS {
            let mut nums = random_nums(40, -1_000..=1_000);
            nums.sort_unstable();

            let squares = sorted_squares(&nums);

            let mut expected = nums
                .iter()
                .map(|&n| i64::from(n) * i64::from(n))
                .collect::<Vec<_>>();
            expected.sort_unstable();
            assert_eq!(squares, expected);
        }
    }

    #[test]
    fn three_sum_triplets_are_valid_and_unique() {
        for _ in 0..ROUNDS {
            let original = random_nums(30, -8..=8);
            let mut nums = original.clone();
            let triplets = three_sum(&mut nums);

            for triplet in &triplets {
                assert_eq!(triplet.iter().sum::<i32>(), 0);
                assert!(triplet.windows(2).all(|w| w[0] <= w[1]));
            }

            let mut deduped = triplets.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), triplets.len(), "duplicate triplet for {original:?}");

            let mut sorted = original.clone();
            sorted.sort_unstable();
            assert_eq!(nums, sorted);
        }
    }

    #[test]
    fn three_sum_finds_every_triplet() {
        for _ in 0..ROUNDS {
            let original = random_nums(15, -5..=5);

            let mut expected = Vec::new();
            for i in 0..original.len() {
                for j in (i + 1)..original.len() {
                    for k in (j + 1)..original.len() {
                        if original[i] + original[j] + original[k] == 0 {
                            let mut triplet = [original[i], original[j], original[k]];
                            triplet.sort_unstable();
                            expected.push(triplet);
                        }
                    }
                }
            }
            expected.sort_unstable();
            expected.dedup();

            let mut found = three_sum(&mut original.clone());
            found.sort_unstable();
            assert_eq!(found, expected, "{original:?}");
        }
    }

    #[test]
    fn sort_colors_groups_and_keeps_counts() {
        for _ in 0..ROUNDS {
            let original = random_nums(60, 0..=2);
            let mut colors = original.clone();
            sort_colors(&mut colors);

            let mut expected = original.clone();
            expected.sort_unstable();
            assert_eq!(colors, expected);
        }
    }

    #[test]
    fn partition_by_key_groups_words() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let mut words = (0..rng.gen_range(0..30))
                .map(|_| "x".repeat(rng.gen_range(0..9)))
                .collect::<Vec<_>>();
            let color_of = |w: &String| match w.len() {
                0..=2 => Color::Red,
                3..=5 => Color::White,
                _ => Color::Blue,
            };

            partition_three_way_by(&mut words, color_of);

            let colors = words.iter().map(color_of).collect::<Vec<_>>();
            assert!(colors.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
