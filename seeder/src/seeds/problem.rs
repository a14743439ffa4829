use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::problem::{Difficulty, Model, TestCase};
use sea_orm::DatabaseConnection;

pub struct ProblemSeeder;

fn cases(pairs: &[(&str, &str)]) -> Vec<TestCase> {
    pairs
        .iter()
        .map(|(input, output)| TestCase {
            input: (*input).to_string(),
            output: (*output).to_string(),
        })
        .collect()
}

#[async_trait]
impl Seeder for ProblemSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let _ = Model::create(
            db,
            "Two Sum",
            "two-sum",
            Difficulty::Easy,
            "Given an array of integers `nums` and an integer `target`, return \
             the indices of the two numbers that add up to `target`. Each input \
             has exactly one solution, and you may not use the same element twice.",
            &cases(&[
                ("[2,7,11,15], 9", "[0,1]"),
                ("[3,3], 6", "[0,1]"),
                ("[3,2,4], 6", "[1,2]"),
            ]),
            "const twoSum = (nums, target) => {\n  // your code here\n};\n",
            &[
                "A brute-force double loop works but is O(n^2).".to_string(),
                "Try a hash map keyed by the complement of each element.".to_string(),
            ],
            Some(
                "const twoSum = (nums, target) => {\n  const m = new Map();\n  \
                 for (let i = 0; i < nums.length; i++) {\n    const c = target - nums[i];\n    \
                 if (m.has(c)) return [m.get(c), i];\n    m.set(nums[i], i);\n  }\n};\n",
            ),
        )
        .await;

        let _ = Model::create(
            db,
            "Reverse String",
            "reverse-string",
            Difficulty::Easy,
            "Given a string `s`, return the string with its characters in \
             reverse order.",
            &cases(&[
                ("\"hello\"", "\"olleh\""),
                ("\"ab\"", "\"ba\""),
                ("\"\"", "\"\""),
            ]),
            "const reverseString = (s) => {\n  // your code here\n};\n",
            &["Strings split into arrays, and arrays reverse.".to_string()],
            Some("const reverseString = (s) => s.split(\"\").reverse().join(\"\");\n"),
        )
        .await;

        let _ = Model::create(
            db,
            "Fizz Buzz",
            "fizz-buzz",
            Difficulty::Easy,
            "Given an integer `n`, return \"FizzBuzz\" if it is divisible by 3 \
             and 5, \"Fizz\" if only by 3, \"Buzz\" if only by 5, and the number \
             itself as a string otherwise.",
            &cases(&[
                ("3", "\"Fizz\""),
                ("5", "\"Buzz\""),
                ("15", "\"FizzBuzz\""),
                ("7", "\"7\""),
            ]),
            "const fizzBuzz = (n) => {\n  // your code here\n};\n",
            &[],
            Some(
                "const fizzBuzz = (n) =>\n  n % 15 === 0 ? \"FizzBuzz\"\n  : n % 3 === 0 ? \"Fizz\"\n  \
                 : n % 5 === 0 ? \"Buzz\"\n  : String(n);\n",
            ),
        )
        .await;
    }
}
