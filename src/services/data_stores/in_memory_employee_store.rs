use crate::domain::{Employee, EmployeeId, EmployeeStore, EmployeeStoreError};

/// Employees kept in insertion order.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeStore {
    fn position(&self, employee_id: &EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| &e.id == employee_id)
    }
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeStoreError> {
        Ok(self.employees.clone())
    }

    async fn add_employee(
        &mut self,
        employee: &Employee,
    ) -> Result<(), EmployeeStoreError> {
        if self.position(&employee.id).is_some() {
            return Err(EmployeeStoreError::EmployeeIDExists);
        }

        self.employees.push(employee.clone());
        Ok(())
    }

    async fn get_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Employee, EmployeeStoreError> {
        match self.position(employee_id) {
            Some(index) => Ok(self.employees[index].clone()),
            None => Err(EmployeeStoreError::EmployeeNotFound),
        }
    }

    async fn update_employee(
        &mut self,
        employee: &Employee,
    ) -> Result<(), EmployeeStoreError> {
        let index = self
            .position(&employee.id)
            .ok_or(EmployeeStoreError::EmployeeNotFound)?;
        self.employees[index] = employee.clone();
        Ok(())
    }

    async fn delete_employee(
        &mut self,
        employee_id: &EmployeeId,
    ) -> Result<(), EmployeeStoreError> {
        match self.position(employee_id) {
            Some(index) => {
                self.employees.remove(index);
                Ok(())
            }
            None => Err(EmployeeStoreError::EmployeeNotFound),
        }
    }
}
