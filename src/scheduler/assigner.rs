//! Two-phase greedy shift assigner.
//!
//! # Algorithm
//!
//! 1. **Preference pass.** For each day, walk the roster in order. Each
//!    employee under the workday cap and not yet working that day is placed
//!    into their best-ranked shift that is still below the minimum
//!    headcount. At most one shift per employee per day.
//! 2. **Gap-filling pass.** For each day and shift still below the
//!    minimum, repeatedly collect the eligible employees (not working that
//!    day, under the cap) and let a [`TieBreakPolicy`] pick one. When
//!    nobody is eligible the cell stays understaffed.
//!
//! Only stated preferences drive the first pass. Shifts an employee left
//! unranked sort after every ranked one and are reached through gap
//! filling, which is what keeps the second pass meaningful.
//!
//! # Complexity
//! O(d * s * n) where d=days, s=shifts, n=employees.

use tracing::{debug, info, trace, warn};

use crate::config::StaffingConstraints;
use crate::error::Result;
use crate::models::{Day, Employee, ShiftKind, ShiftSlot, WeeklySchedule};
use crate::tiebreak::{Candidate, TieBreakPolicy};

/// Two-phase greedy shift assigner.
///
/// Holds the staffing constraints; every call to [`assign`](Self::assign)
/// is an independent run over the roster it is given.
///
/// # Example
///
/// ```
/// use u_roster::config::StaffingConstraints;
/// use u_roster::models::{Day, Employee, ShiftKind};
/// use u_roster::scheduler::ShiftAssigner;
///
/// let mut employees: Vec<Employee> = (0..6)
///     .map(|i| Employee::new(format!("E{i}")))
///     .collect();
/// employees[0] = employees[0].clone().with_preference(Day::Monday, ShiftKind::Night, 1);
///
/// let assigner = ShiftAssigner::new(StaffingConstraints::default());
/// let schedule = assigner.assign(&mut employees).unwrap();
///
/// assert_eq!(schedule.shift_of("E0", Day::Monday), Some(ShiftKind::Night));
/// assert!(employees.iter().all(|e| e.work_days() <= 5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftAssigner {
    constraints: StaffingConstraints,
}

/// Working state of one run. Employees are referenced by roster index.
struct RunState {
    /// Distinct days assigned per employee.
    days_worked: Vec<usize>,
    /// Per employee, whether they already work a given day.
    working: Vec<[bool; 7]>,
    /// Day → shift position → employee indices.
    cells: Vec<Vec<Vec<usize>>>,
    max_work_days: usize,
}

impl RunState {
    fn new(employee_count: usize, shift_count: usize, max_work_days: usize) -> Self {
        Self {
            days_worked: vec![0; employee_count],
            working: vec![[false; 7]; employee_count],
            cells: vec![vec![Vec::new(); shift_count]; Day::ALL.len()],
            max_work_days,
        }
    }

    #[inline]
    fn is_eligible(&self, employee: usize, day: Day) -> bool {
        self.days_worked[employee] < self.max_work_days && !self.working[employee][day.index()]
    }

    #[inline]
    fn headcount(&self, day: Day, shift_pos: usize) -> usize {
        self.cells[day.index()][shift_pos].len()
    }

    fn place(&mut self, employee: usize, day: Day, shift_pos: usize) {
        self.cells[day.index()][shift_pos].push(employee);
        self.working[employee][day.index()] = true;
        self.days_worked[employee] += 1;
    }
}

impl ShiftAssigner {
    /// Creates an assigner for the given constraints.
    pub fn new(constraints: StaffingConstraints) -> Self {
        Self { constraints }
    }

    /// The constraints this assigner enforces.
    pub fn constraints(&self) -> &StaffingConstraints {
        &self.constraints
    }

    /// Runs both passes using the tie-break policy the constraints select.
    ///
    /// Overwrites every employee's assignment set. Fails only when the
    /// constraints themselves are invalid, in which case no employee is
    /// modified.
    pub fn assign(&self, employees: &mut [Employee]) -> Result<WeeklySchedule> {
        let mut policy = self.constraints.tie_break_policy();
        self.assign_with(employees, policy.as_mut())
    }

    /// Runs both passes with an injected tie-break policy.
    pub fn assign_with(
        &self,
        employees: &mut [Employee],
        policy: &mut dyn TieBreakPolicy,
    ) -> Result<WeeklySchedule> {
        self.constraints.validate()?;

        let shifts = &self.constraints.shifts;
        let min_staff = self.constraints.min_staff_per_shift;

        info!(
            event = "run_start",
            employees = employees.len(),
            shifts = shifts.len(),
            min_staff_per_shift = min_staff,
            max_work_days_per_week = self.constraints.max_work_days_per_week,
            tie_break = policy.name(),
        );

        let mut state = RunState::new(
            employees.len(),
            shifts.len(),
            self.constraints.max_work_days_per_week,
        );

        let preferred = self.preference_pass(employees, &mut state);
        debug!(event = "phase_end", phase = "preference", placements = preferred);

        let filled = self.gap_filling_pass(employees, &mut state, policy);
        debug!(event = "phase_end", phase = "gap_filling", placements = filled);

        let schedule = self.build_schedule(employees, &state);
        self.write_back(employees, &state);

        info!(
            event = "run_end",
            assignments = schedule.assignment_count(),
            understaffed_cells = schedule.staffing_gaps().len(),
        );

        Ok(schedule)
    }

    /// Places each eligible employee into their best open ranked shift.
    fn preference_pass(&self, employees: &[Employee], state: &mut RunState) -> usize {
        let shifts = &self.constraints.shifts;
        let min_staff = self.constraints.min_staff_per_shift;
        let mut placements = 0;

        for day in Day::ALL {
            for (idx, employee) in employees.iter().enumerate() {
                if !state.is_eligible(idx, day) {
                    continue;
                }

                let ranked = employee.preferences.ranked(day, shifts);
                let open = ranked
                    .into_iter()
                    .take_while(|&shift| employee.preferences.priority(day, shift).is_ranked())
                    .filter_map(|shift| shift_position(shifts, shift))
                    .find(|&pos| state.headcount(day, pos) < min_staff);

                if let Some(pos) = open {
                    state.place(idx, day, pos);
                    placements += 1;
                    trace!(
                        event = "placed",
                        phase = "preference",
                        employee = %employee.id,
                        day = %day,
                        shift = %shifts[pos],
                    );
                }
            }
        }

        placements
    }

    /// Tops up every understaffed cell from the eligible pool.
    fn gap_filling_pass(
        &self,
        employees: &[Employee],
        state: &mut RunState,
        policy: &mut dyn TieBreakPolicy,
    ) -> usize {
        let shifts = &self.constraints.shifts;
        let min_staff = self.constraints.min_staff_per_shift;
        let mut placements = 0;

        for day in Day::ALL {
            for (pos, &shift) in shifts.iter().enumerate() {
                while state.headcount(day, pos) < min_staff {
                    let candidates: Vec<Candidate<'_>> = employees
                        .iter()
                        .enumerate()
                        .filter(|&(idx, _)| state.is_eligible(idx, day))
                        .map(|(idx, e)| Candidate::new(idx, &e.id, state.days_worked[idx]))
                        .collect();

                    if candidates.is_empty() {
                        warn!(
                            event = "understaffed",
                            day = %day,
                            shift = %shift,
                            assigned = state.headcount(day, pos),
                            required = min_staff,
                        );
                        break;
                    }

                    let slot = ShiftSlot::new(day, shift);
                    let pick = policy.choose(slot, &candidates);
                    debug_assert!(pick < candidates.len(), "tie-break index out of range");
                    let chosen = candidates[pick.min(candidates.len() - 1)];

                    state.place(chosen.roster_index, day, pos);
                    placements += 1;
                    trace!(
                        event = "placed",
                        phase = "gap_filling",
                        employee = chosen.employee_id,
                        day = %day,
                        shift = %shift,
                    );
                }
            }
        }

        placements
    }

    fn build_schedule(&self, employees: &[Employee], state: &RunState) -> WeeklySchedule {
        let shifts = &self.constraints.shifts;
        let mut schedule = WeeklySchedule::new(shifts, self.constraints.min_staff_per_shift);

        for employee in employees {
            schedule.register_name(&employee.id, &employee.name);
        }
        for day in Day::ALL {
            for (pos, &shift) in shifts.iter().enumerate() {
                for &idx in &state.cells[day.index()][pos] {
                    schedule.assign(day, shift, &employees[idx].id);
                }
            }
        }

        schedule
    }

    /// Replaces each employee's assignment set with this run's result.
    fn write_back(&self, employees: &mut [Employee], state: &RunState) {
        for employee in employees.iter_mut() {
            employee.assignments.clear();
        }
        for day in Day::ALL {
            for (pos, &shift) in self.constraints.shifts.iter().enumerate() {
                for &idx in &state.cells[day.index()][pos] {
                    employees[idx].assignments.push(ShiftSlot::new(day, shift));
                }
            }
        }
    }
}

fn shift_position(shifts: &[ShiftKind], shift: ShiftKind) -> Option<usize> {
    shifts.iter().position(|&s| s == shift)
}

/// Generates a weekly schedule with the policy `constraints` selects.
///
/// Convenience wrapper around [`ShiftAssigner::assign`].
pub fn generate_schedule(
    employees: &mut [Employee],
    constraints: &StaffingConstraints,
) -> Result<WeeklySchedule> {
    ShiftAssigner::new(constraints.clone()).assign(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreakKind;
    use crate::error::RosterError;
    use crate::tiebreak::{LeastLoaded, RosterOrder, UniformRandom};

    fn unranked_roster(n: usize) -> Vec<Employee> {
        (0..n).map(|i| Employee::new(format!("E{i}"))).collect()
    }

    fn assert_invariants(employees: &[Employee], schedule: &WeeklySchedule, max_days: usize) {
        for e in employees {
            assert!(e.work_days() <= max_days, "{} works {} days", e.id, e.work_days());
            assert_eq!(e.work_days(), e.assignments.len(), "{} double-booked", e.id);
            assert_eq!(schedule.slots_for(&e.id), e.assignments);
            for day in Day::ALL {
                let shifts_today = schedule
                    .shifts
                    .iter()
                    .filter(|&&s| schedule.employees(day, s).contains(&e.id))
                    .count();
                assert!(shifts_today <= 1);
            }
        }
    }

    #[test]
    fn test_priority_one_honored() {
        let mut employees = unranked_roster(6);
        employees[0] = Employee::new("E0")
            .with_preference(Day::Monday, ShiftKind::Night, 1)
            .with_preference(Day::Monday, ShiftKind::Morning, 2);

        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();
        assert_eq!(schedule.shift_of("E0", Day::Monday), Some(ShiftKind::Night));
        assert_eq!(employees[0].shift_on(Day::Monday), Some(ShiftKind::Night));
    }

    #[test]
    fn test_full_shift_falls_to_next_preference() {
        let mut employees: Vec<Employee> = (0..3)
            .map(|i| {
                Employee::new(format!("E{i}"))
                    .with_preference(Day::Monday, ShiftKind::Morning, 1)
                    .with_preference(Day::Monday, ShiftKind::Afternoon, 2)
            })
            .collect();
        let constraints = StaffingConstraints::default().with_tie_break(TieBreakKind::RosterOrder);
        let schedule = generate_schedule(&mut employees, &constraints).unwrap();

        // Roster order decides who gets the two morning slots
        assert_eq!(
            schedule.employees(Day::Monday, ShiftKind::Morning),
            &["E0".to_string(), "E1".to_string()]
        );
        assert_eq!(schedule.shift_of("E2", Day::Monday), Some(ShiftKind::Afternoon));
    }

    #[test]
    fn test_at_most_one_shift_per_day_in_preference_pass() {
        let mut employees = vec![Employee::new("E0")
            .with_preference(Day::Monday, ShiftKind::Morning, 1)
            .with_preference(Day::Monday, ShiftKind::Afternoon, 1)
            .with_preference(Day::Monday, ShiftKind::Night, 1)];
        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();

        assert_eq!(schedule.shift_of("E0", Day::Monday), Some(ShiftKind::Morning));
        assert_eq!(schedule.headcount(Day::Monday, ShiftKind::Afternoon), 0);
        assert_invariants(&employees, &schedule, 5);
    }

    #[test]
    fn test_preferences_fully_staff_when_cap_allows() {
        // Pairs of employees share a priority-1 shift on every day
        let mut employees: Vec<Employee> = (0..6)
            .map(|i| {
                let shift = ShiftKind::ALL[i / 2];
                Day::ALL.iter().fold(Employee::new(format!("E{i}")), |e, &day| {
                    e.with_preference(day, shift, 1)
                })
            })
            .collect();
        let constraints = StaffingConstraints::default().with_max_work_days_per_week(7);
        let schedule = generate_schedule(&mut employees, &constraints).unwrap();

        assert!(schedule.is_fully_staffed());
        for day in Day::ALL {
            assert_eq!(
                schedule.employees(day, ShiftKind::Afternoon),
                &["E2".to_string(), "E3".to_string()]
            );
        }
        assert_invariants(&employees, &schedule, 7);
    }

    #[test]
    fn test_six_employees_hit_workday_cap() {
        // 42 required slots but only 6 * 5 = 30 employee-days available
        let mut employees: Vec<Employee> = (0..6)
            .map(|i| {
                let shift = ShiftKind::ALL[i % 3];
                Day::ALL.iter().fold(Employee::new(format!("E{i}")), |e, &day| {
                    e.with_preference(day, shift, 1)
                })
            })
            .collect();
        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();

        assert_eq!(schedule.assignment_count(), 30);
        let shortfall: usize = schedule.staffing_gaps().iter().map(|g| g.shortfall()).sum();
        assert_eq!(shortfall, 12);
        assert!(employees.iter().all(|e| e.work_days() == 5));
        assert_invariants(&employees, &schedule, 5);
    }

    #[test]
    fn test_gap_filling_least_loaded_staffs_nine() {
        let mut employees = unranked_roster(9);
        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();

        assert!(schedule.is_fully_staffed());
        assert_eq!(schedule.assignment_count(), 42);
        let days: Vec<usize> = employees.iter().map(Employee::work_days).collect();
        assert_eq!(days, vec![5, 5, 5, 5, 5, 5, 4, 4, 4]);
        assert_invariants(&employees, &schedule, 5);
    }

    #[test]
    fn test_gap_filling_balances_twelve() {
        let mut employees = unranked_roster(12);
        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();

        assert!(schedule.is_fully_staffed());
        // Least-loaded alternates the two halves of the roster day by day
        assert_eq!(schedule.shift_of("E6", Day::Tuesday), Some(ShiftKind::Morning));
        assert_eq!(schedule.shift_of("E0", Day::Wednesday), Some(ShiftKind::Morning));
        let max = employees.iter().map(Employee::work_days).max().unwrap();
        let min = employees.iter().map(Employee::work_days).min().unwrap();
        assert_eq!((min, max), (3, 4));
    }

    #[test]
    fn test_two_employees_understaffed() {
        let mut employees = unranked_roster(2);
        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();

        // Both take Monday-Friday mornings, nothing else can be covered
        assert_eq!(schedule.staffing_gaps().len(), 16);
        assert_eq!(schedule.headcount(Day::Friday, ShiftKind::Morning), 2);
        assert_eq!(schedule.headcount(Day::Saturday, ShiftKind::Morning), 0);
        assert_invariants(&employees, &schedule, 5);
    }

    #[test]
    fn test_empty_roster() {
        let mut employees: Vec<Employee> = Vec::new();
        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();
        assert_eq!(schedule.assignment_count(), 0);
        assert_eq!(schedule.staffing_gaps().len(), 21);
    }

    #[test]
    fn test_previous_assignments_reset() {
        let mut employees = unranked_roster(6);
        employees[5].assignments = vec![
            ShiftSlot::new(Day::Sunday, ShiftKind::Night),
            ShiftSlot::new(Day::Saturday, ShiftKind::Night),
        ];
        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();
        assert_eq!(employees[5].assignments, schedule.slots_for("E5"));
        assert_invariants(&employees, &schedule, 5);
    }

    #[test]
    fn test_invalid_constraints_leave_roster_untouched() {
        let mut employees = unranked_roster(6);
        let previous = vec![ShiftSlot::new(Day::Monday, ShiftKind::Morning)];
        employees[0].assignments = previous.clone();

        let constraints = StaffingConstraints::default().with_min_staff_per_shift(0);
        let err = generate_schedule(&mut employees, &constraints).unwrap_err();

        assert!(matches!(err, RosterError::InvalidConstraints(_)));
        assert_eq!(employees[0].assignments, previous);
    }

    #[test]
    fn test_injected_policy() {
        // Only Morning, nobody ranks anything → all placement by policy
        let constraints = StaffingConstraints::default()
            .with_shifts([ShiftKind::Morning])
            .with_min_staff_per_shift(1);
        let assigner = ShiftAssigner::new(constraints);

        let mut employees = unranked_roster(3);
        let schedule = assigner.assign_with(&mut employees, &mut RosterOrder).unwrap();
        // E0 takes Monday-Friday, then E1 covers the weekend
        assert_eq!(schedule.employees(Day::Friday, ShiftKind::Morning), &["E0".to_string()]);
        assert_eq!(schedule.employees(Day::Saturday, ShiftKind::Morning), &["E1".to_string()]);

        let mut employees = unranked_roster(3);
        let schedule = assigner.assign_with(&mut employees, &mut LeastLoaded).unwrap();
        assert_eq!(schedule.employees(Day::Tuesday, ShiftKind::Morning), &["E1".to_string()]);
        assert_eq!(schedule.employees(Day::Wednesday, ShiftKind::Morning), &["E2".to_string()]);
    }

    #[test]
    fn test_least_loaded_is_deterministic() {
        let mut first = crate::demo::sample_roster();
        let mut second = crate::demo::sample_roster();
        let constraints = StaffingConstraints::default();

        let a = generate_schedule(&mut first, &constraints).unwrap();
        let b = generate_schedule(&mut second, &constraints).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_policy_seeded() {
        let constraints = StaffingConstraints::default()
            .with_tie_break(TieBreakKind::Random)
            .with_seed(2024);

        let mut first = unranked_roster(9);
        let mut second = unranked_roster(9);
        let a = generate_schedule(&mut first, &constraints).unwrap();
        let b = generate_schedule(&mut second, &constraints).unwrap();
        assert_eq!(a, b);
        assert_invariants(&first, &a, 5);

        let assigner = ShiftAssigner::new(StaffingConstraints::default());
        let mut third = unranked_roster(9);
        let c = assigner
            .assign_with(&mut third, &mut UniformRandom::seeded(2024))
            .unwrap();
        assert_invariants(&third, &c, 5);
    }

    #[test]
    fn test_largest_stated_rank_used_in_preference_pass() {
        let mut employees = vec![Employee::new("E0").with_preference(
            Day::Monday,
            ShiftKind::Night,
            u32::MAX,
        )];
        let schedule = generate_schedule(&mut employees, &StaffingConstraints::default()).unwrap();
        assert_eq!(employees[0].shift_on(Day::Monday), Some(ShiftKind::Night));
        assert_eq!(schedule.employees(Day::Monday, ShiftKind::Night), &["E0".to_string()]);
    }

    #[test]
    fn test_configured_shift_order_in_assignments() {
        let constraints = StaffingConstraints::default()
            .with_min_staff_per_shift(1)
            .with_max_work_days_per_week(7)
            .with_shifts([ShiftKind::Night, ShiftKind::Morning]);
        let mut employees = unranked_roster(2);
        let schedule = generate_schedule(&mut employees, &constraints).unwrap();

        let monday: Vec<ShiftKind> = schedule
            .cells()
            .filter(|(slot, _)| slot.day == Day::Monday)
            .map(|(slot, _)| slot.shift)
            .collect();
        assert_eq!(monday, vec![ShiftKind::Night, ShiftKind::Morning]);
        for e in &employees {
            assert_eq!(schedule.slots_for(&e.id), e.assignments);
        }
    }

    #[test]
    fn test_subset_of_shifts() {
        let mut employees =
            vec![Employee::new("E0").with_preference(Day::Monday, ShiftKind::Night, 1)];
        let constraints = StaffingConstraints::default()
            .with_shifts([ShiftKind::Morning, ShiftKind::Afternoon])
            .with_min_staff_per_shift(1);
        let schedule = generate_schedule(&mut employees, &constraints).unwrap();

        // Night is not scheduled, so the preference cannot be honored
        assert_eq!(schedule.cell_count(), 14);
        assert_ne!(schedule.shift_of("E0", Day::Monday), Some(ShiftKind::Night));
        assert_invariants(&employees, &schedule, 5);
    }
}
