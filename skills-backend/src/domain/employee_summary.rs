// src/domain/employee_summary.rs

//! 従業員ごとのスキル要約（担当スキル一覧と正規化スコアの平均・最高）

use super::skill_level::{normalize, round_to};
use serde::Serialize;
use std::collections::BTreeSet;

/// 要約の材料になる評価1件
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSample {
    pub emp_id: i32,
    pub emp_name: String,
    pub dept_name: String,
    pub skill_name: String,
    pub score: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub emp_id: i32,
    pub emp_name: String,
    pub dept_name: String,
    pub skills: Vec<String>,
    pub average_score: Option<f64>,
    pub high_score: Option<f64>,
}

struct Accumulator {
    emp_id: i32,
    emp_name: String,
    dept_name: String,
    skills: BTreeSet<String>,
    normalized: Vec<f64>,
}

impl Accumulator {
    fn finish(self, places: u32) -> EmployeeSummary {
        let count = self.normalized.len();
        let average_score = (count > 0)
            .then(|| self.normalized.iter().sum::<f64>() / count as f64)
            .map(|avg| round_to(avg, places));
        let high_score = self
            .normalized
            .iter()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
            .map(|max| round_to(max, places));

        EmployeeSummary {
            emp_id: self.emp_id,
            emp_name: self.emp_name,
            dept_name: self.dept_name,
            skills: self.skills.into_iter().collect(),
            average_score,
            high_score,
        }
    }
}

/// 評価を従業員ごとにまとめる。
///
/// 入力は従業員名順に並んでいる前提で、同じ `emp_id` が連続する範囲を1人分として扱う。
/// 最大スコアが 0 以下の評価はスキル一覧にのみ含める。
pub fn summarize<I>(samples: I, places: u32) -> Vec<EmployeeSummary>
where
    I: IntoIterator<Item = EvaluationSample>,
{
    let mut summaries = Vec::new();
    let mut current: Option<Accumulator> = None;

    for sample in samples {
        if current.as_ref().map(|acc| acc.emp_id) != Some(sample.emp_id) {
            if let Some(done) = current.take() {
                summaries.push(done.finish(places));
            }
            current = Some(Accumulator {
                emp_id: sample.emp_id,
                emp_name: sample.emp_name.clone(),
                dept_name: sample.dept_name.clone(),
                skills: BTreeSet::new(),
                normalized: Vec::new(),
            });
        }

        if let Some(acc) = current.as_mut() {
            if let Some(value) = normalize(sample.score, sample.max_score) {
                acc.normalized.push(value);
            }
            acc.skills.insert(sample.skill_name);
        }
    }

    if let Some(done) = current {
        summaries.push(done.finish(places));
    }

    summaries
}
