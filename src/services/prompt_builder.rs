/// 构建发给模型的出题提示词
///
/// 要求模型按 `Q<k>: / a1) / a2) / b1) / b2)` 的固定格式输出，
/// 解析器依赖这个格式
pub fn build_generation_prompt(question_count: usize) -> String {
    format!(
        r#"Generate {} comprehensive, academically rigorous questions based on the image content.
Ensure questions are:
- Precise and clear
- Directly related to the image
- Avoid using words like 'module', 'textbook', or referencing specific learning materials
- Demonstrate deep analytical thinking

For each question, create two main parts (a and b).
Each part should have two sub-questions.

Format the output as:
Q1:
a1) First sub-question of part a
a2) Second sub-question of part a
b1) First sub-question of part b
b2) Second sub-question of part b

Focus on extracting and analyzing key information from the image."#,
        question_count
    )
}
