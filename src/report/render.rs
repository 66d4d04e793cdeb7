use super::PerformanceReport;
use crate::analytics::{AccuracyBand, GoalProgress, StudentOverview};
use crate::essay::Essay;
use crate::time_format::{format_clock, format_duration_hms};
use crate::user::Student;
use chrono::NaiveDate;
use colored::Colorize;

const NAME_WIDTH: usize = 22;
const BAR_WIDTH: usize = 20;

/// Turns a `PerformanceReport` into terminal text
pub struct ReportRenderer {
    color: bool,
}

impl ReportRenderer {
    pub fn new(color: bool) -> Self {
        ReportRenderer { color }
    }

    /// No escape codes, used for exports and snapshots
    pub fn plain() -> Self {
        ReportRenderer::new(false)
    }

    pub fn render(&self, report: &PerformanceReport) -> String {
        let mut lines = Vec::new();
        self.header(report, &mut lines);
        self.subject_hours(report, &mut lines);
        self.questions(report, &mut lines);
        self.methods(report, &mut lines);
        self.details(report, &mut lines);
        self.distribution(report, &mut lines);
        self.shifts(report, &mut lines);
        lines.join("\n")
    }

    /// Goal progress table for the goals page
    pub fn render_goals(&self, goals: &[GoalProgress], today: NaiveDate) -> String {
        let mut lines = Vec::new();
        let title = format!("Metas de {}", today.format("%d/%m/%Y"));
        lines.push(self.bold(&title));
        lines.push("-".repeat(title.chars().count()));
        for goal in goals {
            let unit = goal.kind.unit();
            let mut line = format!(
                "  {:<26}{:>7} / {:<7}{:>4}%",
                goal.kind.label(),
                goal_value(goal.current, unit),
                goal_value(goal.target, unit),
                goal.percent
            );
            if goal.done {
                line.push_str("  ");
                line.push_str(&self.paint("concluída", "#10b981"));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    /// One row per student for the assessor dashboard
    pub fn render_overviews(&self, rows: &[(Student, StudentOverview)]) -> String {
        let title = "Visão Geral dos Alunos";
        let mut lines = vec![self.bold(title), "-".repeat(title.chars().count())];
        if rows.is_empty() {
            self.empty_state("Nenhum aluno vinculado.", &mut lines);
            return lines.join("\n");
        }
        lines.push(format!(
            "  {:<width$}{:>8}{:>8}{:>10}{:>8}",
            "Aluno",
            "Sessões",
            "Tempo",
            "Questões",
            "Acerto",
            width = NAME_WIDTH
        ));
        for (student, overview) in rows {
            let accuracy = format!("{:>8}", format!("{}%", overview.accuracy));
            let band = AccuracyBand::from_accuracy(overview.accuracy);
            lines.push(format!(
                "  {:<width$}{:>8}{:>8}{:>10}{}",
                student.name,
                overview.sessions,
                format_clock(overview.total_seconds),
                overview.questions,
                self.paint(&accuracy, band.color()),
                width = NAME_WIDTH
            ));
        }
        lines.join("\n")
    }

    /// Submitted essays with status, theme and grade
    pub fn render_essays(&self, essays: &[Essay]) -> String {
        let title = "Redações Enviadas";
        let mut lines = vec![self.bold(title), "-".repeat(title.chars().count())];
        if essays.is_empty() {
            self.empty_state("Nenhuma redação registrada.", &mut lines);
            return lines.join("\n");
        }
        for essay in essays {
            let status = format!("{:>12}", essay.status.as_str());
            lines.push(format!(
                "  {:<40}{}",
                essay.title,
                self.paint(&status, essay.status.color())
            ));
            let mut detail = format!("    {} - {}", essay.date.format("%d/%m/%Y"), essay.theme);
            if let Some(score) = essay.score {
                detail.push_str(&format!("  Nota: {}", score));
            }
            lines.push(detail);
            if let Some(feedback) = &essay.feedback {
                lines.push(format!("    {}", feedback));
            }
        }
        lines.join("\n")
    }

    fn header(&self, report: &PerformanceReport, lines: &mut Vec<String>) {
        lines.push(self.bold("RELATÓRIO DE DESEMPENHO"));
        lines.push(format!("Aluno: {}", report.student_name));
        lines.push(format!("Período: {}", report.period_label()));
        lines.push(format!("Sessões no período: {}", report.sessions));
        lines.push(format!(
            "Tempo total: {}",
            format_duration_hms(report.total_seconds)
        ));
    }

    fn section(&self, title: &str, lines: &mut Vec<String>) {
        lines.push(String::new());
        lines.push(self.bold(title));
        lines.push("-".repeat(title.chars().count()));
    }

    fn empty_state(&self, message: &str, lines: &mut Vec<String>) {
        let text = format!("  {}", message);
        lines.push(if self.color {
            text.as_str().dimmed().to_string()
        } else {
            text
        });
    }

    fn subject_hours(&self, report: &PerformanceReport, lines: &mut Vec<String>) {
        self.section("Horas por Disciplina", lines);
        if report.subject_hours.is_empty() {
            self.empty_state("Sem dados neste período", lines);
            return;
        }
        for row in &report.subject_hours {
            lines.push(format!(
                "  {:<width$}{:>6.1}h",
                row.subject.as_str(),
                row.hours,
                width = NAME_WIDTH
            ));
        }
    }

    fn questions(&self, report: &PerformanceReport, lines: &mut Vec<String>) {
        let total = report.total_questions();
        self.section(&format!("Questões Respondidas (Total: {})", total), lines);
        if report.questions.is_empty() {
            self.empty_state("Sem questões resolvidas", lines);
            return;
        }
        for bucket in &report.questions {
            let share = crate::analytics::accuracy(bucket.value, total);
            let label = format!("{:<10}", bucket.outcome.label());
            lines.push(format!(
                "  {}{:>6}  {:>3}%",
                self.paint(&label, bucket.outcome.color()),
                bucket.value,
                share
            ));
        }
    }

    fn methods(&self, report: &PerformanceReport, lines: &mut Vec<String>) {
        self.section("Métodos de Estudo Utilizados", lines);
        if report.methods.is_empty() {
            self.empty_state("Sem dados de registro.", lines);
            return;
        }
        for share in &report.methods {
            lines.push(format!(
                "  {:<18}{:>4} {:<8}{:>4}%",
                share.method.as_str(),
                share.count,
                sessions_word(share.count),
                share.percentage
            ));
        }
    }

    fn details(&self, report: &PerformanceReport, lines: &mut Vec<String>) {
        self.section("Detalhamento por Disciplina", lines);
        if report.details.is_empty() {
            self.empty_state("Nenhum registro encontrado para este período.", lines);
            return;
        }
        lines.push(format!(
            "  {:<width$}{:>7}{:>10}{:>8}  {}",
            "Disciplina",
            "Horas",
            "Questões",
            "Acerto",
            "Métodos Principais",
            width = NAME_WIDTH
        ));
        for row in &report.details {
            let accuracy = format!("{:>8}", format!("{}%", row.accuracy));
            lines.push(format!(
                "  {:<width$}{:>7}{:>10}{}  {}",
                row.subject.as_str(),
                format!("{}h", row.hours),
                row.questions,
                self.paint(&accuracy, row.band().color()),
                row.methods,
                width = NAME_WIDTH
            ));
        }
    }

    fn distribution(&self, report: &PerformanceReport, lines: &mut Vec<String>) {
        self.section("Distribuição Geral (% Horas)", lines);
        if report.distribution.is_empty() {
            self.empty_state("Sem dados neste período", lines);
            return;
        }
        for share in &report.distribution {
            let filled = (share.percent as usize * BAR_WIDTH) / 100;
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
            lines.push(format!(
                "  {:<width$}{:>4}%  {}",
                share.subject.as_str(),
                share.percent,
                self.paint(&bar, "#3b82f6"),
                width = NAME_WIDTH
            ));
        }
    }

    fn shifts(&self, report: &PerformanceReport, lines: &mut Vec<String>) {
        let best = match report.shifts.most_productive {
            Some(shift) => self.paint(shift.label(), shift.color()),
            None => report.shifts.most_productive_label().to_string(),
        };
        lines.push(String::new());
        lines.push(format!("{} {}", self.bold("Turno Mais Produtivo:"), best));
        lines.push("-".repeat("Turno Mais Produtivo:".chars().count()));
        if report.shifts.slices.is_empty() {
            self.empty_state("Dados insuficientes", lines);
            return;
        }
        for slice in &report.shifts.slices {
            let label = format!("{:<12}", slice.shift.label());
            lines.push(format!(
                "  {}{:>4} {}",
                self.paint(&label, slice.shift.color()),
                slice.value,
                sessions_word(slice.value)
            ));
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, hex: &str) -> String {
        match hex_rgb(hex) {
            Some((r, g, b)) if self.color => text.truecolor(r, g, b).to_string(),
            _ => text.to_string(),
        }
    }
}

fn goal_value(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{:.0}", value)
    } else {
        format!("{:.1}{}", value, unit)
    }
}

fn sessions_word(count: u32) -> &'static str {
    if count == 1 { "sessão" } else { "sessões" }
}

/// "#rrggbb" to its channels
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(digits.get(at..at + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
